use super::{ProofStandard, Scheme};
use crate::utils::Label;
use anyhow::{anyhow, Context, Result};
use log::warn;
use std::collections::{BTreeMap, HashMap};

/// Free-form metadata attached to graphs, statements, issues and arguments.
///
/// Keys are kept sorted; values are any JSON-compatible value.
pub type Metadata = BTreeMap<String, serde_json::Value>;

macro_rules! handle {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Returns the position of the entity in its arena.
            pub fn index(&self) -> usize {
                self.0
            }
        }
    };
}

handle!(StatementId, "A handle to a statement of an [`ArgGraph`].");
handle!(ArgumentId, "A handle to an argument of an [`ArgGraph`].");
handle!(IssueId, "A handle to an issue of an [`ArgGraph`].");

/// A statement, that is a claim which may be assumed, concluded by arguments or be a position of an issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    id: String,
    text: String,
    assumed: bool,
    issue: Option<IssueId>,
    args: Vec<ArgumentId>,
    label: Label,
    metadata: Metadata,
}

impl Statement {
    /// Builds a new statement given its identifier.
    pub fn new(id: &str) -> Self {
        Statement {
            id: id.to_string(),
            text: String::new(),
            assumed: false,
            issue: None,
            args: vec![],
            label: Label::Undecided,
            metadata: Metadata::default(),
        }
    }

    /// Sets the text of the statement.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Sets whether the statement is assumed.
    pub fn with_assumed(mut self, assumed: bool) -> Self {
        self.assumed = assumed;
        self
    }

    /// Sets the label of the statement.
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    /// Sets the metadata of the statement.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the identifier of the statement.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the text of the statement.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` iff the statement is assumed.
    pub fn is_assumed(&self) -> bool {
        self.assumed
    }

    /// Returns the issue this statement is a position of, if any.
    pub fn issue(&self) -> Option<IssueId> {
        self.issue
    }

    /// Returns the arguments concluding this statement.
    pub fn args(&self) -> &[ArgumentId] {
        &self.args
    }

    /// Returns the label written by the last call to [`ArgGraph::apply_labelling`].
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the metadata of the statement.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// An issue, that is a set of mutually exclusive positions decided by a proof standard.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    id: String,
    positions: Vec<StatementId>,
    standard: ProofStandard,
    metadata: Metadata,
}

impl Issue {
    /// Builds a new issue with no positions, using the default proof standard.
    pub fn new(id: &str) -> Self {
        Issue {
            id: id.to_string(),
            positions: vec![],
            standard: ProofStandard::default(),
            metadata: Metadata::default(),
        }
    }

    /// Sets the proof standard of the issue.
    pub fn with_standard(mut self, standard: ProofStandard) -> Self {
        self.standard = standard;
        self
    }

    /// Sets the metadata of the issue.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the identifier of the issue.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the positions of the issue.
    pub fn positions(&self) -> &[StatementId] {
        &self.positions
    }

    /// Returns the proof standard of the issue.
    pub fn standard(&self) -> ProofStandard {
        self.standard
    }

    /// Returns the metadata of the issue.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// A premise of an argument: a statement, together with the role it plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Premise {
    stmt: StatementId,
    role: String,
}

impl Premise {
    /// Builds a premise with no role.
    pub fn new(stmt: StatementId) -> Self {
        Premise {
            stmt,
            role: String::new(),
        }
    }

    /// Builds a premise playing the given role.
    pub fn with_role(stmt: StatementId, role: &str) -> Self {
        Premise {
            stmt,
            role: role.to_string(),
        }
    }

    /// Returns the statement of the premise.
    pub fn stmt(&self) -> StatementId {
        self.stmt
    }

    /// Returns the role of the premise, an empty string if it has none.
    pub fn role(&self) -> &str {
        &self.role
    }
}

/// A structured argument.
#[derive(Debug, Clone)]
pub struct Argument {
    id: String,
    scheme: Option<Scheme>,
    premises: Vec<Premise>,
    conclusion: Option<StatementId>,
    undercutter: Option<StatementId>,
    weight: f64,
    metadata: Metadata,
}

impl Argument {
    /// Builds an argument with no premises, no conclusion and no scheme.
    pub fn new(id: &str) -> Self {
        Argument {
            id: id.to_string(),
            scheme: None,
            premises: vec![],
            conclusion: None,
            undercutter: None,
            weight: 0.,
            metadata: Metadata::default(),
        }
    }

    /// Sets the scheme used to weigh the argument.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Sets the premises of the argument.
    pub fn with_premises(mut self, premises: Vec<Premise>) -> Self {
        self.premises = premises;
        self
    }

    /// Sets the conclusion of the argument.
    pub fn with_conclusion(mut self, conclusion: StatementId) -> Self {
        self.conclusion = Some(conclusion);
        self
    }

    /// Sets the undercutter of the argument.
    pub fn with_undercutter(mut self, undercutter: StatementId) -> Self {
        self.undercutter = Some(undercutter);
        self
    }

    /// Sets the weight of the argument.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the metadata of the argument.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the identifier of the argument.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the scheme of the argument, if any.
    pub fn scheme(&self) -> Option<&Scheme> {
        self.scheme.as_ref()
    }

    /// Returns the premises of the argument.
    pub fn premises(&self) -> &[Premise] {
        &self.premises
    }

    /// Returns the conclusion of the argument, if any.
    pub fn conclusion(&self) -> Option<StatementId> {
        self.conclusion
    }

    /// Returns the undercutter of the argument, if any.
    pub fn undercutter(&self) -> Option<StatementId> {
        self.undercutter
    }

    /// Returns the weight written by the last call to [`ArgGraph::apply_labelling`].
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the metadata of the argument.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn statements(&self) -> impl Iterator<Item = StatementId> + '_ {
        self.premises
            .iter()
            .map(|p| p.stmt)
            .chain(self.conclusion)
            .chain(self.undercutter)
    }
}

/// A Structured Argument Graph.
///
/// Statements, issues and arguments are stored in arenas and refer to each other through handles.
/// The builder methods ([`add_statement`](Self::add_statement), [`add_issue`](Self::add_issue) and [`add_argument`](Self::add_argument))
/// check that the handles they receive are in range and maintain the back references from statements to their issue and their concluding arguments.
/// Handles are plain positions: a handle obtained from another graph is only rejected when it is out of range,
/// otherwise it designates the statement at the same position in this graph.
///
/// # Example
///
/// ```
/// # use carneades::sag::{ArgGraph, Argument, Premise, Statement};
/// # use carneades::utils::Label;
/// let mut graph = ArgGraph::default();
/// let bird = graph.add_statement(Statement::new("bird").with_assumed(true)).unwrap();
/// let flies = graph.add_statement(Statement::new("flies")).unwrap();
/// graph
///     .add_argument(Argument::new("a1").with_premises(vec![Premise::new(bird)]).with_conclusion(flies))
///     .unwrap();
/// let labelling = graph.grounded_labelling();
/// assert_eq!(Label::In, labelling.get(flies));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgGraph {
    metadata: Metadata,
    statements: Vec<Statement>,
    issues: Vec<Issue>,
    arguments: Vec<Argument>,
    references: BTreeMap<String, Metadata>,
    statement_ids: HashMap<String, StatementId>,
    issue_ids: HashMap<String, IssueId>,
    argument_ids: HashMap<String, ArgumentId>,
}

fn lookup<H: Copy>(ids: &HashMap<String, H>, kind: &str, id: &str) -> Result<H> {
    ids.get(id)
        .copied()
        .ok_or_else(|| anyhow!("no such {}: {}", kind, id))
}

impl ArgGraph {
    /// Returns the metadata of the graph.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Sets the metadata of the graph.
    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
    }

    /// Returns the bibliographic references of the graph, indexed by their keys.
    pub fn references(&self) -> &BTreeMap<String, Metadata> {
        &self.references
    }

    /// Adds (or replaces) a bibliographic reference.
    pub fn add_reference(&mut self, key: &str, reference: Metadata) {
        self.references.insert(key.to_string(), reference);
    }

    /// Adds a statement.
    ///
    /// The issue and the concluding arguments of the statement are ignored;
    /// they are set when the issue and the arguments are added.
    /// An error is returned if a statement with the same identifier exists.
    pub fn add_statement(&mut self, mut stmt: Statement) -> Result<StatementId> {
        if self.statement_ids.contains_key(&stmt.id) {
            return Err(anyhow!("statement {} is defined twice", stmt.id));
        }
        stmt.issue = None;
        stmt.args.clear();
        let handle = StatementId(self.statements.len());
        self.statement_ids.insert(stmt.id.clone(), handle);
        self.statements.push(stmt);
        Ok(handle)
    }

    /// Adds an issue with the given positions.
    ///
    /// An error is returned if an issue with the same identifier exists,
    /// if a position is out of range for this graph, or if a position already belongs to another issue.
    /// An in-range handle taken from another graph is not detected.
    pub fn add_issue(&mut self, mut issue: Issue, positions: &[StatementId]) -> Result<IssueId> {
        let context = || format!("while adding issue {}", issue.id);
        if self.issue_ids.contains_key(&issue.id) {
            return Err(anyhow!("issue {} is defined twice", issue.id));
        }
        for p in positions {
            let stmt = self.try_statement(*p).with_context(context)?;
            if let Some(other) = stmt.issue {
                return Err(anyhow!(
                    "statement {} is a position of issues {} and {}",
                    stmt.id,
                    self.issues[other.0].id,
                    issue.id
                ));
            }
            if positions.iter().filter(|q| *q == p).count() > 1 {
                return Err(anyhow!("statement {} is listed twice", stmt.id))
                    .with_context(context);
            }
        }
        let handle = IssueId(self.issues.len());
        positions
            .iter()
            .for_each(|p| self.statements[p.0].issue = Some(handle));
        issue.positions = positions.to_vec();
        self.issue_ids.insert(issue.id.clone(), handle);
        self.issues.push(issue);
        Ok(handle)
    }

    /// Adds an argument.
    ///
    /// An error is returned if an argument with the same identifier exists,
    /// if one of its statement handles is out of range for this graph,
    /// if its weight is not in `[0,1]` or if its scheme does not consider it valid.
    /// An in-range handle taken from another graph is not detected.
    pub fn add_argument(&mut self, arg: Argument) -> Result<ArgumentId> {
        let context = || format!("while adding argument {}", arg.id);
        if self.argument_ids.contains_key(&arg.id) {
            return Err(anyhow!("argument {} is defined twice", arg.id));
        }
        for s in arg.statements() {
            self.try_statement(s).with_context(context)?;
        }
        if !(0. ..=1.).contains(&arg.weight) {
            return Err(anyhow!("weight {} is not in [0,1]", arg.weight)).with_context(context);
        }
        if let Some(scheme) = &arg.scheme {
            if !scheme.is_valid(self, &arg) {
                return Err(anyhow!("argument is not valid for scheme {}", scheme.id()))
                    .with_context(context);
            }
        }
        let handle = ArgumentId(self.arguments.len());
        if let Some(c) = arg.conclusion {
            self.statements[c.0].args.push(handle);
        }
        self.argument_ids.insert(arg.id.clone(), handle);
        self.arguments.push(arg);
        Ok(handle)
    }

    /// Sets whether a statement is assumed.
    pub fn set_assumed(&mut self, stmt: StatementId, assumed: bool) {
        self.statements[stmt.0].assumed = assumed;
    }

    fn try_statement(&self, stmt: StatementId) -> Result<&Statement> {
        self.statements
            .get(stmt.0)
            .ok_or_else(|| anyhow!("no such statement handle: {}", stmt.0))
    }

    /// Returns the statement associated with a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not come from this graph.
    pub fn statement(&self, stmt: StatementId) -> &Statement {
        &self.statements[stmt.0]
    }

    /// Returns the issue associated with a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not come from this graph.
    pub fn issue(&self, issue: IssueId) -> &Issue {
        &self.issues[issue.0]
    }

    /// Returns the argument associated with a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not come from this graph.
    pub fn argument(&self, arg: ArgumentId) -> &Argument {
        &self.arguments[arg.0]
    }

    /// Returns the handle of a statement given its identifier.
    pub fn statement_id(&self, id: &str) -> Result<StatementId> {
        lookup(&self.statement_ids, "statement", id)
    }

    /// Returns the handle of an issue given its identifier.
    pub fn issue_id(&self, id: &str) -> Result<IssueId> {
        lookup(&self.issue_ids, "issue", id)
    }

    /// Returns the handle of an argument given its identifier.
    pub fn argument_id(&self, id: &str) -> Result<ArgumentId> {
        lookup(&self.argument_ids, "argument", id)
    }

    /// Iterates over the statements, in insertion order.
    pub fn iter_statements(&self) -> impl Iterator<Item = (StatementId, &Statement)> + '_ {
        self.statements
            .iter()
            .enumerate()
            .map(|(i, s)| (StatementId(i), s))
    }

    /// Iterates over the issues, in insertion order.
    pub fn iter_issues(&self) -> impl Iterator<Item = (IssueId, &Issue)> + '_ {
        self.issues.iter().enumerate().map(|(i, s)| (IssueId(i), s))
    }

    /// Iterates over the arguments, in insertion order.
    pub fn iter_arguments(&self) -> impl Iterator<Item = (ArgumentId, &Argument)> + '_ {
        self.arguments
            .iter()
            .enumerate()
            .map(|(i, a)| (ArgumentId(i), a))
    }

    /// Returns the number of statements.
    pub fn n_statements(&self) -> usize {
        self.statements.len()
    }

    /// Returns the number of issues.
    pub fn n_issues(&self) -> usize {
        self.issues.len()
    }

    /// Returns the number of arguments.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Checks that no issue has more than one assumed position.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::sag::{ArgGraph, Issue, Statement};
    /// let mut graph = ArgGraph::default();
    /// let p = graph.add_statement(Statement::new("p").with_assumed(true)).unwrap();
    /// let q = graph.add_statement(Statement::new("q").with_assumed(true)).unwrap();
    /// graph.add_issue(Issue::new("i"), &[p, q]).unwrap();
    /// assert!(graph.check_consistency().is_err());
    /// ```
    pub fn check_consistency(&self) -> Result<()> {
        for issue in self.issues.iter() {
            let assumed = issue
                .positions
                .iter()
                .filter(|p| self.statements[p.0].assumed)
                .map(|p| self.statements[p.0].id.as_str())
                .collect::<Vec<&str>>();
            if assumed.len() > 1 {
                return Err(anyhow!(
                    "issue {} has more than one assumed position ({})",
                    issue.id,
                    assumed.join(", ")
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn warn_if_inconsistent(&self) {
        if let Err(e) = self.check_consistency() {
            warn!("the graph is inconsistent: {}", e);
        }
    }

    pub(crate) fn set_results(&mut self, labels: Vec<Label>, weights: Vec<f64>) {
        self.statements
            .iter_mut()
            .zip(labels)
            .for_each(|(s, l)| s.label = l);
        self.arguments
            .iter_mut()
            .zip(weights)
            .for_each(|(a, w)| a.weight = w);
    }
}
