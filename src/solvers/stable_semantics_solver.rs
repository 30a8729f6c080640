use super::specs::{
    CredulousAcceptanceComputer, ExtensionEnumerator, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, ArgSet},
    utils::LabelType,
};

/// A solver for the stable semantics.
///
/// A stable extension is a complete extension attacking every argument it does not contain.
/// Some frameworks have no stable extension; in this case, every argument is skeptically accepted.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> SingleExtensionComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<ArgSet<T>> {
        self.af.find(|s| self.af.is_stable(s))
    }
}

impl<T> ExtensionEnumerator<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<ArgSet<T>> {
        let mut extensions = vec![];
        self.af.traverse(|s| {
            if self.af.is_stable(s) {
                extensions.push(s.clone())
            }
        });
        extensions
    }
}

impl<T> CredulousAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>) {
        let ext = self.af.find(|s| s.contains(arg) && self.af.is_stable(s));
        (ext.is_some(), ext)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>) {
        let counter_example = self.af.find(|s| !s.contains(arg) && self.af.is_stable(s));
        (counter_example.is_none(), counter_example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{InstanceReader, TgfReader};

    fn read(instance: &str) -> AAFramework<String> {
        TgfReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_even_cycle() {
        let af = read("1\n2\n#\n1 2\n2 1\n");
        let mut solver = StableSemanticsSolver::new(&af);
        let extensions = solver
            .enumerate_extensions()
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>();
        assert_eq!(vec!["[1]", "[2]"], extensions);
        assert_eq!("[1]", solver.compute_one_extension().unwrap().to_string());
    }

    #[test]
    fn test_no_stable_extension() {
        let af = read("1\n2\n3\n#\n1 2\n2 3\n3 1\n");
        let mut solver = StableSemanticsSolver::new(&af);
        assert!(solver.compute_one_extension().is_none());
        assert!(solver.enumerate_extensions().is_empty());
        assert!(!solver.is_credulously_accepted(&"1".to_string()));
        assert!(solver.is_skeptically_accepted(&"1".to_string()));
    }

    #[test]
    fn test_acceptance() {
        let af = read("a\nb\nc\n#\na b\nb a\nb c\n");
        let mut solver = StableSemanticsSolver::new(&af);
        assert!(solver.is_credulously_accepted(&"c".to_string()));
        let (status, certificate) =
            solver.is_skeptically_accepted_with_certificate(&"c".to_string());
        assert!(!status);
        assert_eq!("[b]", certificate.unwrap().to_string());
    }
}
