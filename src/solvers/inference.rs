use super::{
    CompleteSemanticsSolver, GroundedSemanticsSolver, PreferredSemanticsSolver, SemanticsSolver,
    StableSemanticsSolver,
};
use crate::{
    aa::{AAFramework, ArgSet, Semantics},
    utils::LabelType,
};
use log::debug;

/// Builds the solver dedicated to a semantics.
///
/// # Example
///
/// ```
/// # use carneades::aa::{AAFramework, ArgumentSet, Semantics};
/// # use carneades::solvers::new_solver;
/// let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"]));
/// let mut solver = new_solver(&af, Semantics::PR);
/// assert!(solver.is_skeptically_accepted(&"a"));
/// ```
pub fn new_solver<T>(af: &AAFramework<T>, semantics: Semantics) -> Box<dyn SemanticsSolver<T> + '_>
where
    T: LabelType,
{
    match semantics {
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::CO => Box::new(CompleteSemanticsSolver::new(af)),
        Semantics::PR => Box::new(PreferredSemanticsSolver::new(af)),
        Semantics::ST => Box::new(StableSemanticsSolver::new(af)),
    }
}

/// Inference queries, dispatched to the solver of the requested semantics.
impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Returns the complete extensions, in traversal order.
    pub fn complete_extensions(&self) -> Vec<ArgSet<T>> {
        self.extensions(Semantics::CO)
    }

    /// Returns the preferred extensions, that is the subset-maximal complete extensions.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::{AAFramework, ArgSet};
    /// # use std::collections::HashMap;
    /// let attackers = HashMap::from([(1, vec![2]), (2, vec![1])]);
    /// let framework = AAFramework::new_with_attackers(&[1, 2], &attackers).unwrap();
    /// assert_eq!(
    ///     vec![ArgSet::from_labels(&[1]), ArgSet::from_labels(&[2])],
    ///     framework.preferred_extensions(),
    /// );
    /// ```
    pub fn preferred_extensions(&self) -> Vec<ArgSet<T>> {
        self.extensions(Semantics::PR)
    }

    /// Returns the stable extensions.
    pub fn stable_extensions(&self) -> Vec<ArgSet<T>> {
        self.extensions(Semantics::ST)
    }

    /// Returns all the extensions under a semantics.
    pub fn extensions(&self, semantics: Semantics) -> Vec<ArgSet<T>> {
        let extensions = new_solver(self, semantics).enumerate_extensions();
        debug!(
            "found {} extension(s) under semantics {}",
            extensions.len(),
            semantics.as_ref()
        );
        extensions
    }

    /// Returns an extension under a semantics, or `None` if the semantics admits no extension.
    pub fn some_extension(&self, semantics: Semantics) -> Option<ArgSet<T>> {
        new_solver(self, semantics).compute_one_extension()
    }

    /// Returns `true` iff the argument belongs to some extension under a semantics.
    ///
    /// An argument that does not belong to the framework is never inferred.
    pub fn credulously_inferred(&self, semantics: Semantics, arg: &T) -> bool {
        if !self.argument_set().has_argument(arg) {
            debug!("credulous inference of undefined argument {}", arg);
            return false;
        }
        new_solver(self, semantics).is_credulously_accepted(arg)
    }

    /// Returns `true` iff the argument belongs to every extension under a semantics.
    ///
    /// An argument that does not belong to the framework is never inferred.
    /// If the semantics admits no extension, every argument of the framework is inferred.
    pub fn skeptically_inferred(&self, semantics: Semantics, arg: &T) -> bool {
        if !self.argument_set().has_argument(arg) {
            debug!("skeptical inference of undefined argument {}", arg);
            return false;
        }
        new_solver(self, semantics).is_skeptically_accepted(arg)
    }
}
