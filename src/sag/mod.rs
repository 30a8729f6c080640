//! Structured Argument Graphs, as defined by the Carneades model of argument.
//!
//! A graph is made of statements, arguments concluding statements from premises, and issues grouping mutually exclusive positions.
//! Its [grounded labelling](ArgGraph::grounded_labelling) labels each statement `in`, `out` or `undecided`,
//! weighing arguments with [schemes](Scheme) and resolving issues with [proof standards](ProofStandard).

mod arg_graph;
pub use arg_graph::ArgGraph;
pub use arg_graph::Argument;
pub use arg_graph::ArgumentId;
pub use arg_graph::Issue;
pub use arg_graph::IssueId;
pub use arg_graph::Metadata;
pub use arg_graph::Premise;
pub use arg_graph::Statement;
pub use arg_graph::StatementId;

mod evaluator;

mod labelling;
pub use labelling::Labelling;

mod proof_standard;
pub use proof_standard::ProofStandard;
pub use proof_standard::ALPHA;
pub use proof_standard::BETA;

mod schemes;
pub use schemes::CustomScheme;
pub use schemes::Scheme;
pub use schemes::SchemeEvaluator;
pub use schemes::SchemeValidator;
