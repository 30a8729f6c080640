use crate::{aa::ArgSet, utils::LabelType};

/// A trait for solvers able to compute an extension.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    fn compute_one_extension(&mut self) -> Option<ArgSet<T>>;
}

/// A trait for solvers able to list all the extensions.
pub trait ExtensionEnumerator<T>
where
    T: LabelType,
{
    /// Computes all the extensions.
    ///
    /// The order of the extensions follows the order in which subsets of arguments are visited by the framework traversal.
    fn enumerate_extensions(&mut self) -> Vec<ArgSet<T>>;
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    fn is_credulously_accepted(&mut self, arg: &T) -> bool {
        self.is_credulously_accepted_with_certificate(arg).0
    }

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    fn is_credulously_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>);
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    fn is_skeptically_accepted(&mut self, arg: &T) -> bool {
        self.is_skeptically_accepted_with_certificate(arg).0
    }

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    fn is_skeptically_accepted_with_certificate(&mut self, arg: &T) -> (bool, Option<ArgSet<T>>);
}

/// A solver able to answer all the queries for a semantics.
pub trait SemanticsSolver<T>:
    SingleExtensionComputer<T>
    + ExtensionEnumerator<T>
    + CredulousAcceptanceComputer<T>
    + SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
}

impl<T, S> SemanticsSolver<T> for S
where
    T: LabelType,
    S: SingleExtensionComputer<T>
        + ExtensionEnumerator<T>
        + CredulousAcceptanceComputer<T>
        + SkepticalAcceptanceComputer<T>,
{
}
