use super::specs::{
    CredulousAcceptanceComputer, ExtensionEnumerator, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, ArgSet},
    utils::LabelType,
};

/// A solver for the complete semantics.
///
/// A complete extension is a conflict-free set of arguments which is exactly the set of arguments it defends.
///
/// Extensions are searched by a traversal of the subsets of arguments (see [`AAFramework::traverse`]).
/// Decision problems rely on [`AAFramework::find`], so they stop as soon as a witness is met.
/// The first complete extension met by the traversal is the one returned by [compute_one_extension](SingleExtensionComputer::compute_one_extension).
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the complete semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::{AAFramework, ArgumentSet};
    /// # use carneades::utils::LabelType;
    /// # use carneades::solvers::{CredulousAcceptanceComputer, CompleteSemanticsSolver};
    /// fn check_credulous_acceptance<T>(af: &AAFramework<T>, arg: &T) where T: LabelType {
    ///     let mut solver = CompleteSemanticsSolver::new(af);
    ///     if solver.is_credulously_accepted(arg) {
    ///         println!("there exists complete extension(s) with {}", arg)
    ///     } else {
    ///         println!("there is no complete extension with {}", arg)
    ///     }
    /// }
    /// # let arg_set = ArgumentSet::new_with_labels(&["a"]);
    /// # let af = AAFramework::new_with_argument_set(arg_set);
    /// # check_credulous_acceptance(&af, &"a");
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> SingleExtensionComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<ArgSet<T>> {
        self.af.find(|s| self.af.is_complete(s))
    }
}

impl<T> ExtensionEnumerator<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<ArgSet<T>> {
        let mut extensions = vec![];
        self.af.traverse(|s| {
            if self.af.is_complete(s) {
                extensions.push(s.clone())
            }
        });
        extensions
    }
}

impl<T> CredulousAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>) {
        let ext = self.af.find(|s| s.contains(arg) && self.af.is_complete(s));
        (ext.is_some(), ext)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>) {
        let counter_example = self.af.find(|s| !s.contains(arg) && self.af.is_complete(s));
        (counter_example.is_none(), counter_example)
    }
}
