use super::specs::{
    CredulousAcceptanceComputer, ExtensionEnumerator, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, ArgSet},
    utils::LabelType,
};
use log::debug;

/// A solver for the preferred semantics.
///
/// Preferred extensions are the subset-maximal complete extensions.
/// They are computed incrementally while complete extensions are produced by the traversal of the framework:
/// a complete extension included in a current candidate is skipped;
/// otherwise, the candidates it includes are discarded and it becomes a candidate itself.
///
/// All queries require the enumeration of the preferred extensions.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the preferred semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

/// Keeps the subset-maximal sets of a sequence, in the order they are produced.
pub(crate) fn maximal_sets<T, I>(sets: I) -> Vec<ArgSet<T>>
where
    T: LabelType,
    I: IntoIterator<Item = ArgSet<T>>,
{
    let mut candidates: Vec<ArgSet<T>> = vec![];
    for s in sets {
        if candidates.iter().any(|c| s.is_subset(c)) {
            continue;
        }
        candidates.retain(|c| !c.is_subset(&s));
        candidates.push(s);
    }
    candidates
}

impl<T> ExtensionEnumerator<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<ArgSet<T>> {
        let mut complete = vec![];
        self.af.traverse(|s| {
            if self.af.is_complete(s) {
                complete.push(s.clone())
            }
        });
        debug!(
            "filtering {} complete extension(s) to get the preferred ones",
            complete.len()
        );
        maximal_sets(complete)
    }
}

impl<T> SingleExtensionComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<ArgSet<T>> {
        self.enumerate_extensions().into_iter().next()
    }
}

impl<T> CredulousAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>) {
        let ext = self
            .enumerate_extensions()
            .into_iter()
            .find(|e| e.contains(arg));
        (ext.is_some(), ext)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>) {
        let counter_example = self
            .enumerate_extensions()
            .into_iter()
            .find(|e| !e.contains(arg));
        (counter_example.is_none(), counter_example)
    }
}
