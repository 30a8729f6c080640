use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};
use strum_macros::EnumString;

/// The trait for argument names.
///
/// Arguments may be named by any type implementing some traits allowing their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize] and [String] implements [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// The status given to an argument or a statement by a labelling.
///
/// Labellings never fail on unknown keys: anything they do not mention is [`Label::Undecided`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Label {
    /// Rejected.
    Out,
    /// Accepted.
    In,
    /// Neither accepted nor rejected.
    #[default]
    Undecided,
}
