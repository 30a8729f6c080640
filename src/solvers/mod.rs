//! Solvers for the semantics of abstract argumentation.
//!
//! Each semantics has its own solver, implementing the traits defined in this module.
//! [`new_solver`] builds the solver associated with a [`Semantics`](crate::aa::Semantics) value.

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod inference;
pub use inference::new_solver;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SemanticsSolver;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
