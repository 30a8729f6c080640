//! Carneades is an evaluator for argumentation graphs.
//!
//! It handles both abstract argumentation frameworks, in which arguments are atomic and only related by attacks,
//! and structured argument graphs, in which arguments link premise statements to a conclusion and
//! statements are grouped into issues decided by proof standards.
//!
//! The [`aa`] module defines abstract frameworks and the [`solvers`] module computes their extensions.
//! The [`sag`] module defines structured argument graphs and their grounded evaluation.
//! The [`io`] module reads and writes both kinds of graphs.

#![warn(missing_docs)]

pub mod aa;

pub mod io;

pub mod sag;

pub mod solvers;

pub mod utils;
