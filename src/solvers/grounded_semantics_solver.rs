use super::{
    CredulousAcceptanceComputer, ExtensionEnumerator, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, ArgSet},
    utils::LabelType,
};

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension (see [CompleteSemanticsSolver](crate::solvers::CompleteSemanticsSolver) for more information).
/// It is computed in time polynomial in the size of the framework.
///
/// All the queries resume to the computation of the grounded extension.
/// When a certificate is provided, the certificate is the grounded extension itself.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::AAFramework;
    /// # use carneades::utils::LabelType;
    /// # use carneades::solvers::{SingleExtensionComputer, GroundedSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap();
    ///     println!("found the grounded extension: {}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> SingleExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<ArgSet<T>> {
        Some(self.af.grounded_extension())
    }
}

impl<T> ExtensionEnumerator<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<ArgSet<T>> {
        vec![self.af.grounded_extension()]
    }
}

impl<T> CredulousAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>) {
        let ext = self.af.grounded_extension();
        if ext.contains(arg) {
            (true, Some(ext))
        } else {
            (false, None)
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>) {
        let ext = self.af.grounded_extension();
        if ext.contains(arg) {
            (true, None)
        } else {
            (false, Some(ext))
        }
    }
}
