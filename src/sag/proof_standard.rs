use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The threshold the weight difference must exceed for the clear and convincing evidence and beyond reasonable doubt standards.
pub const ALPHA: f64 = 0.5;

/// The threshold under which the weight of the alternatives must stay for the beyond reasonable doubt standard.
pub const BETA: f64 = 0.3;

/// The proof standards an issue may use to decide which of its positions wins.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum ProofStandard {
    /// Dialectical validity.
    DV,
    /// Preponderance of evidence.
    #[default]
    PE,
    /// Clear and convincing evidence.
    CCE,
    /// Beyond reasonable doubt.
    BRD,
}

impl ProofStandard {
    /// Returns `true` iff a position with weight `w1` beats an alternative with weight `w2` under this standard.
    ///
    /// Beyond reasonable doubt requires both `w1 > w2` and `w2 - w1 > ALPHA`, so it never holds.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::sag::ProofStandard;
    /// assert!(ProofStandard::PE.greater(0.6, 0.4));
    /// assert!(!ProofStandard::CCE.greater(0.6, 0.4));
    /// assert!(ProofStandard::CCE.greater(0.9, 0.3));
    /// ```
    pub fn greater(&self, w1: f64, w2: f64) -> bool {
        match self {
            ProofStandard::DV | ProofStandard::PE => w1 > w2,
            ProofStandard::CCE => w1 > w2 && w1 - w2 > ALPHA,
            ProofStandard::BRD => w1 > w2 && w2 - w1 > ALPHA && w2 < BETA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_pe() {
        assert_eq!(ProofStandard::PE, ProofStandard::default());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ProofStandard::CCE, ProofStandard::from_str("CCE").unwrap());
        assert!(ProofStandard::from_str("XX").is_err());
        assert_eq!(
            vec!["DV", "PE", "CCE", "BRD"],
            ProofStandard::iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>()
        );
    }

    #[test]
    fn test_dv_and_pe() {
        for s in [ProofStandard::DV, ProofStandard::PE] {
            assert!(s.greater(0.1, 0.0));
            assert!(!s.greater(1.0, 1.0));
            assert!(!s.greater(0.0, 0.5));
        }
    }

    #[test]
    fn test_cce() {
        assert!(ProofStandard::CCE.greater(1.0, 0.4));
        assert!(!ProofStandard::CCE.greater(1.0, 0.5));
    }

    #[test]
    fn test_brd_never_holds() {
        assert!(!ProofStandard::BRD.greater(1.0, 0.0));
        assert!(!ProofStandard::BRD.greater(0.9, 0.1));
        assert!(!ProofStandard::BRD.greater(0.0, 1.0));
    }
}
