use crate::utils::LabelType;
use std::fmt::Display;

/// A set of argument names with value semantics.
///
/// Operations never modify the receiver: [`add`](Self::add) and [`remove`](Self::remove) return new sets.
/// This keeps subset enumeration free of shared mutable state, as each node of the enumeration tree owns its set.
///
/// Elements are kept in insertion order, which is the order used by [`iter`](Self::iter) and [`Display`].
/// Equality does not depend on this order.
///
/// # Example
///
/// ```
/// # use carneades::aa::ArgSet;
/// let empty = ArgSet::default();
/// let s = empty.add("a").add("b");
/// assert!(s.contains(&"a"));
/// assert!(!empty.contains(&"a"));
/// assert_eq!(s, ArgSet::from_labels(&["b", "a"]));
/// assert_eq!("[a,b]", s.to_string());
/// ```
#[derive(Clone, Debug)]
pub struct ArgSet<T>
where
    T: LabelType,
{
    args: Vec<T>,
}

impl<T> Default for ArgSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self { args: vec![] }
    }
}

impl<T> ArgSet<T>
where
    T: LabelType,
{
    /// Builds a set from a slice of names, ignoring repetitions.
    pub fn from_labels(labels: &[T]) -> Self {
        labels
            .iter()
            .fold(ArgSet::default(), |acc, l| acc.add(l.clone()))
    }

    /// Returns a set containing the elements of this one plus `arg`.
    ///
    /// If `arg` already belongs to this set, the returned set is equal to this one.
    pub fn add(&self, arg: T) -> Self {
        if self.contains(&arg) {
            return self.clone();
        }
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.extend(self.args.iter().cloned());
        args.push(arg);
        Self { args }
    }

    // Same as `add`, but the new element comes first in the iteration order.
    pub(crate) fn add_first(&self, arg: T) -> Self {
        if self.contains(&arg) {
            return self.clone();
        }
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(arg);
        args.extend(self.args.iter().cloned());
        Self { args }
    }

    /// Returns a set containing the elements of this one except `arg`.
    ///
    /// If `arg` does not belong to this set, the returned set is equal to this one.
    pub fn remove(&self, arg: &T) -> Self {
        if !self.contains(arg) {
            return self.clone();
        }
        Self {
            args: self.args.iter().filter(|a| *a != arg).cloned().collect(),
        }
    }

    /// Returns `true` iff `arg` belongs to this set.
    pub fn contains(&self, arg: &T) -> bool {
        self.args.contains(arg)
    }

    /// Returns the number of elements of this set.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns `true` iff this set has no element.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Returns `true` iff every element of this set is in `other`.
    ///
    /// The empty set is a subset of any set.
    pub fn is_subset(&self, other: &ArgSet<T>) -> bool {
        self.args.iter().all(|a| other.contains(a))
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.args.iter()
    }
}

impl<T> PartialEq for ArgSet<T>
where
    T: LabelType,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T> Eq for ArgSet<T> where T: LabelType {}

impl<T> Display for ArgSet<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, a) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", a)?;
        }
        write!(f, "]")
    }
}

/// Returns `true` iff every set of `l1` is equal to some set of `l2`.
///
/// The containment is only checked in one direction; callers comparing lists for equality must check their lengths.
///
/// # Example
///
/// ```
/// # use carneades::aa::{equal_arg_set_slices, ArgSet};
/// let l1 = vec![ArgSet::from_labels(&["a"])];
/// let l2 = vec![ArgSet::from_labels(&["b"]), ArgSet::from_labels(&["a"])];
/// assert!(equal_arg_set_slices(&l1, &l2));
/// assert!(!equal_arg_set_slices(&l2, &l1));
/// ```
pub fn equal_arg_set_slices<T>(l1: &[ArgSet<T>], l2: &[ArgSet<T>]) -> bool
where
    T: LabelType,
{
    l1.iter().all(|s1| l2.iter().any(|s2| s1 == s2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_does_not_modify_receiver() {
        let s = ArgSet::from_labels(&["a"]);
        let t = s.add("b");
        assert_eq!(1, s.len());
        assert_eq!(2, t.len());
        assert!(t.contains(&"b"));
    }

    #[test]
    fn test_add_existing() {
        let s = ArgSet::from_labels(&["a", "b"]);
        assert_eq!(s, s.add("a"));
        assert_eq!(2, s.add("a").len());
    }

    #[test]
    fn test_add_then_remove() {
        let s = ArgSet::from_labels(&["a", "b"]);
        assert_eq!(s, s.add("c").remove(&"c"));
        assert_eq!(s, s.remove(&"z"));
        assert_eq!(ArgSet::from_labels(&["b"]), s.remove(&"a"));
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(
            ArgSet::from_labels(&["a", "b", "c"]),
            ArgSet::from_labels(&["c", "a", "b"])
        );
        assert_ne!(
            ArgSet::from_labels(&["a", "b"]),
            ArgSet::from_labels(&["a", "b", "c"])
        );
    }

    #[test]
    fn test_subset() {
        let empty = ArgSet::<&str>::default();
        let ab = ArgSet::from_labels(&["a", "b"]);
        assert!(empty.is_subset(&ab));
        assert!(empty.is_subset(&empty));
        assert!(ab.is_subset(&ab));
        assert!(ArgSet::from_labels(&["b"]).is_subset(&ab));
        assert!(!ab.is_subset(&ArgSet::from_labels(&["a"])));
    }

    #[test]
    fn test_display() {
        assert_eq!("[]", ArgSet::<String>::default().to_string());
        assert_eq!("[1,3]", ArgSet::from_labels(&[1, 3]).to_string());
    }

    #[test]
    fn test_equal_slices_reflexive() {
        let l = vec![
            ArgSet::default(),
            ArgSet::from_labels(&["a"]),
            ArgSet::from_labels(&["a", "b"]),
        ];
        assert!(equal_arg_set_slices(&l, &l));
        assert!(equal_arg_set_slices(&[] as &[ArgSet<&str>], &l));
    }
}
