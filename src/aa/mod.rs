//! This module contains the main material used to define Abstract Argumentation.

mod aa_framework;
pub use aa_framework::AAFramework;
pub use aa_framework::Attack;

mod arg_set;
pub use arg_set::equal_arg_set_slices;
pub use arg_set::ArgSet;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;

mod problem;
pub use problem::read_problem_string;
pub use problem::Query;
pub use problem::Semantics;
