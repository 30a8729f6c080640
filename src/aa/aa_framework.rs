use super::{ArgSet, Argument, ArgumentSet};
use crate::utils::{Label, LabelType};
use anyhow::{Context, Result};
use log::debug;
use std::collections::HashMap;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// The framework is an ordered sequence of arguments together with, for each argument, the list of its attackers.
/// The order of the arguments fixes the order in which subsets are visited by [`traverse`](Self::traverse) and [`find`](Self::find).
#[derive(Debug, Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attackers: Vec<Vec<usize>>,
    n_attacks: usize,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use carneades::aa::Attack;
    /// # use carneades::utils::LabelType;
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework with no attacks.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attackers = (0..arguments.len()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attackers,
            n_attacks: 0,
        }
    }

    /// Builds an AA framework given its argument sequence and its attackers map.
    ///
    /// The attackers map associates an argument with the arguments attacking it.
    /// Arguments absent from the map, or mapped to an empty list, are unattacked.
    /// The order of each list of attackers is kept.
    ///
    /// If an argument of the map is not in the argument sequence, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::{AAFramework, ArgSet};
    /// # use std::collections::HashMap;
    /// let attackers = HashMap::from([("b", vec!["a"])]);
    /// let framework = AAFramework::new_with_attackers(&["a", "b"], &attackers).unwrap();
    /// assert_eq!(ArgSet::from_labels(&["a"]), framework.grounded_extension());
    /// ```
    pub fn new_with_attackers(labels: &[T], attackers: &HashMap<T, Vec<T>>) -> Result<Self> {
        let mut af = Self::new_with_argument_set(ArgumentSet::new_with_labels(labels));
        let distinct_labels: Vec<T> = af
            .argument_set()
            .iter()
            .map(|a| a.label().clone())
            .collect();
        for attacked in distinct_labels.iter() {
            if let Some(v) = attackers.get(attacked) {
                v.iter()
                    .try_for_each(|attacker| af.new_attack(attacker, attacked))?;
            }
        }
        if let Some(unknown) = attackers
            .keys()
            .find(|a| !af.arguments.has_argument(a))
        {
            return Err(anyhow::anyhow!(
                "the attackers map refers to the unknown argument {}",
                unknown
            ));
        }
        Ok(af)
    }

    /// Adds a new argument at the end of the argument sequence.
    ///
    /// If an argument with the same name exists, nothing is done.
    pub fn new_argument(&mut self, label: T) {
        let old_len = self.arguments.len();
        self.arguments.new_argument(label);
        if self.arguments.len() > old_len {
            self.attackers.push(Vec::new());
        }
    }

    /// Adds a new attack given the names of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    /// If the attack already exists, it is added another time (no checks are made for existence).
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(0, framework.iter_attacks().count());
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// assert_eq!(1, framework.iter_attacks().count());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        self.attackers[attacked_id].push(attacker_id);
        self.n_attacks += 1;
        Ok(())
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.n_attacks
    }

    /// Provides an iterator to the attacks.
    ///
    /// Attacks are grouped by attacked argument, following the argument order;
    /// for a given attacked argument, the attackers come in the order they were added.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attackers
            .iter()
            .enumerate()
            .flat_map(move |(attacked, v)| {
                v.iter().map(move |attacker| {
                    Attack(
                        self.arguments.get_argument_by_id(*attacker),
                        self.arguments.get_argument_by_id(attacked),
                    )
                })
            })
    }

    /// Provides an iterator to the attackers of an argument.
    pub fn iter_attackers(&self, arg: &Argument<T>) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.attackers[arg.id()]
            .iter()
            .map(|i| self.arguments.get_argument_by_id(*i))
    }

    /// Returns the names of the arguments attacking the one given by its name.
    ///
    /// An error is returned if the argument is undefined.
    pub fn attackers_of(&self, label: &T) -> Result<Vec<&T>> {
        let arg = self.arguments.get_argument(label)?;
        Ok(self.iter_attackers(arg).map(|a| a.label()).collect())
    }

    /// Computes the grounded labelling of the framework.
    ///
    /// The labelling starts empty (all arguments undecided).
    /// At each pass, an undecided argument becomes `out` if one of its attackers is `in`,
    /// and `in` if all its attackers are `out`.
    /// The process stops when a pass leaves the labelling unchanged.
    ///
    /// The returned vector is indexed by argument ids.
    pub fn grounded_labelling(&self) -> Vec<Label> {
        let mut labels = vec![Label::Undecided; self.n_arguments()];
        let mut n_passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            n_passes += 1;
            for (id, attackers) in self.attackers.iter().enumerate() {
                if labels[id] != Label::Undecided {
                    continue;
                }
                if attackers.iter().any(|a| labels[*a] == Label::In) {
                    labels[id] = Label::Out;
                    changed = true;
                } else if attackers.iter().all(|a| labels[*a] == Label::Out) {
                    labels[id] = Label::In;
                    changed = true;
                }
            }
        }
        debug!("grounded labelling computed in {} pass(es)", n_passes);
        labels
    }

    /// Computes the grounded extension of the framework.
    ///
    /// The grounded extension is the set of arguments labelled `in` by the [grounded labelling](Self::grounded_labelling).
    /// Its elements are given in the argument order.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::{AAFramework, ArgSet};
    /// # use std::collections::HashMap;
    /// let attackers = HashMap::from([(1, vec![2]), (2, vec![3])]);
    /// let framework = AAFramework::new_with_attackers(&[1, 2, 3], &attackers).unwrap();
    /// assert_eq!(ArgSet::from_labels(&[1, 3]), framework.grounded_extension());
    /// ```
    pub fn grounded_extension(&self) -> ArgSet<T> {
        self.grounded_labelling()
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == Label::In)
            .fold(ArgSet::default(), |acc, (id, _)| {
                acc.add(self.arguments.get_argument_by_id(id).label().clone())
            })
    }

    fn membership(&self, set: &ArgSet<T>) -> Vec<bool> {
        let mut in_set = vec![false; self.n_arguments()];
        set.iter()
            .filter_map(|a| self.arguments.get_argument_index(a).ok())
            .for_each(|id| in_set[id] = true);
        in_set
    }

    fn is_attacked_by(&self, attacked: usize, in_set: &[bool]) -> bool {
        self.attackers[attacked].iter().any(|a| in_set[*a])
    }

    fn is_defended_by(&self, arg: usize, in_set: &[bool]) -> bool {
        self.attackers[arg]
            .iter()
            .all(|attacker| self.is_attacked_by(*attacker, in_set))
    }

    /// Returns `true` iff no argument of the set attacks another argument of the set.
    pub fn is_conflict_free(&self, set: &ArgSet<T>) -> bool {
        let in_set = self.membership(set);
        in_set
            .iter()
            .enumerate()
            .all(|(id, b)| !b || !self.is_attacked_by(id, &in_set))
    }

    /// Returns `true` iff every attacker of `arg` is attacked by some argument of the set.
    ///
    /// An undefined argument is never defended.
    pub fn defends(&self, set: &ArgSet<T>, arg: &T) -> bool {
        match self.arguments.get_argument_index(arg) {
            Ok(id) => self.is_defended_by(id, &self.membership(set)),
            Err(_) => false,
        }
    }

    /// Returns `true` iff the set is a complete extension.
    ///
    /// A set is a complete extension if it is conflict-free and if it is exactly the set of arguments it defends.
    pub fn is_complete(&self, set: &ArgSet<T>) -> bool {
        if set.iter().any(|a| !self.arguments.has_argument(a)) {
            return false;
        }
        let in_set = self.membership(set);
        let conflict_free = in_set
            .iter()
            .enumerate()
            .all(|(id, b)| !b || !self.is_attacked_by(id, &in_set));
        conflict_free
            && in_set
                .iter()
                .enumerate()
                .all(|(id, b)| *b == self.is_defended_by(id, &in_set))
    }

    /// Returns `true` iff the set is a stable extension.
    ///
    /// A stable extension is a complete extension that attacks every argument it does not contain.
    pub fn is_stable(&self, set: &ArgSet<T>) -> bool {
        if !self.is_complete(set) {
            return false;
        }
        let in_set = self.membership(set);
        in_set
            .iter()
            .enumerate()
            .all(|(id, b)| *b || self.is_attacked_by(id, &in_set))
    }

    /// Calls `f` on every subset of the arguments, each subset being visited exactly once.
    ///
    /// The subsets are visited in the order of a binary counter where the first argument is the least significant bit:
    /// for the arguments `a`, `b`, `c` the order is `[]`, `[a]`, `[b]`, `[a,b]`, `[c]`, `[a,c]`, `[b,c]`, `[a,b,c]`.
    /// The traversal is a depth-first search where each level first excludes, then includes its argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::{ArgumentSet, AAFramework};
    /// let framework = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
    /// let mut visited = vec![];
    /// framework.traverse(|s| visited.push(s.to_string()));
    /// assert_eq!(vec!["[]", "[a]", "[b]", "[a,b]"], visited);
    /// ```
    pub fn traverse<F>(&self, mut f: F)
    where
        F: FnMut(&ArgSet<T>),
    {
        self.traverse_from(self.n_arguments(), &ArgSet::default(), &mut f)
    }

    // `n_undecided` is the number of arguments (taken from the start of the sequence) not yet decided.
    fn traverse_from<F>(&self, n_undecided: usize, current: &ArgSet<T>, f: &mut F)
    where
        F: FnMut(&ArgSet<T>),
    {
        if n_undecided == 0 {
            f(current);
            return;
        }
        let index = n_undecided - 1;
        self.traverse_from(index, current, f);
        let with_arg =
            current.add_first(self.arguments.get_argument_by_id(index).label().clone());
        self.traverse_from(index, &with_arg, f);
    }

    /// Returns the first subset of arguments satisfying the predicate, if any.
    ///
    /// Subsets are visited in the order given by [`traverse`](Self::traverse);
    /// the search stops at the first match.
    pub fn find<P>(&self, mut pred: P) -> Option<ArgSet<T>>
    where
        P: FnMut(&ArgSet<T>) -> bool,
    {
        self.find_from(self.n_arguments(), ArgSet::default(), &mut pred)
    }

    fn find_from<P>(&self, n_undecided: usize, current: ArgSet<T>, pred: &mut P) -> Option<ArgSet<T>>
    where
        P: FnMut(&ArgSet<T>) -> bool,
    {
        if n_undecided == 0 {
            return if pred(&current) { Some(current) } else { None };
        }
        let index = n_undecided - 1;
        let with_arg =
            current.add_first(self.arguments.get_argument_by_id(index).label().clone());
        self.find_from(index, current, pred)
            .or_else(|| self.find_from(index, with_arg, pred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn af_from(labels: &[&'static str], attacks: &[(&'static str, &'static str)]) -> AAFramework<&'static str> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(labels));
        attacks
            .iter()
            .for_each(|(from, to)| af.new_attack(from, to).unwrap());
        af
    }

    #[test]
    fn test_n_args() {
        let af = af_from(&["a", "b", "c"], &[]);
        assert_eq!(3, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_new_attack_ok() {
        let af = af_from(&["a", "b"], &[("a", "b"), ("b", "b")]);
        assert_eq!(2, af.n_attacks());
        assert_eq!(vec![&"a", &"b"], af.attackers_of(&"b").unwrap());
        assert!(af.attackers_of(&"a").unwrap().is_empty());
    }

    #[test]
    fn test_new_attack_unknown_label() {
        let mut af = af_from(&["a", "b"], &[]);
        af.new_attack(&"d", &"a").unwrap_err();
        af.new_attack(&"a", &"d").unwrap_err();
    }

    #[test]
    fn test_new_argument() {
        let mut af = af_from(&["a", "b", "c"], &[]);
        af.new_argument("d");
        assert_eq!(4, af.n_arguments());
        af.new_argument("d");
        assert_eq!(4, af.n_arguments());
        af.new_attack(&"d", &"a").unwrap();
    }

    #[test]
    fn test_new_with_attackers_empty_list() {
        let attackers = HashMap::from([("a", vec![]), ("b", vec!["a"])]);
        let af = AAFramework::new_with_attackers(&["a", "b"], &attackers).unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!(ArgSet::from_labels(&["a"]), af.grounded_extension());
    }

    #[test]
    fn test_new_with_attackers_duplicate_label() {
        let attackers = HashMap::from([("b", vec!["a"])]);
        let af = AAFramework::new_with_attackers(&["a", "b", "b"], &attackers).unwrap();
        assert_eq!(2, af.n_arguments());
        assert_eq!(1, af.n_attacks());
        assert_eq!(vec![&"a"], af.attackers_of(&"b").unwrap());
    }

    #[test]
    fn test_new_with_attackers_unknown_argument() {
        let attackers = HashMap::from([("b", vec!["z"])]);
        assert!(AAFramework::new_with_attackers(&["a", "b"], &attackers).is_err());
        let attackers = HashMap::from([("z", vec!["a"])]);
        assert!(AAFramework::new_with_attackers(&["a", "b"], &attackers).is_err());
    }

    #[test]
    fn test_iter_attacks() {
        let af = af_from(&["a", "b", "c"], &[("c", "b"), ("a", "b"), ("b", "a")]);
        let attacks = af
            .iter_attacks()
            .map(|att| format!("{}->{}", att.attacker(), att.attacked()))
            .collect::<Vec<String>>();
        assert_eq!(vec!["b->a", "c->b", "a->b"], attacks);
    }

    #[test]
    fn test_grounded_unattacked() {
        let af = af_from(&["a"], &[]);
        assert_eq!(ArgSet::from_labels(&["a"]), af.grounded_extension());
    }

    #[test]
    fn test_grounded_self_attack() {
        let af = af_from(&["a"], &[("a", "a")]);
        assert!(af.grounded_extension().is_empty());
    }

    #[test]
    fn test_grounded_reinstatement() {
        let af = af_from(&["a", "b", "c", "d", "e", "f"], &[
            ("a", "b"),
            ("b", "c"),
            ("b", "d"),
            ("c", "e"),
            ("d", "e"),
            ("e", "f"),
        ]);
        assert_eq!(
            ArgSet::from_labels(&["a", "c", "d", "f"]),
            af.grounded_extension()
        );
        let labels = af.grounded_labelling();
        assert_eq!(Label::Out, labels[1]);
        assert_eq!(Label::Out, labels[4]);
    }

    #[test]
    fn test_grounded_odd_cycle() {
        let af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(af
            .grounded_labelling()
            .iter()
            .all(|l| *l == Label::Undecided));
    }

    #[test]
    fn test_conflict_free() {
        let af = af_from(&["a", "b", "c"], &[("a", "b")]);
        assert!(af.is_conflict_free(&ArgSet::from_labels(&["a", "c"])));
        assert!(!af.is_conflict_free(&ArgSet::from_labels(&["a", "b"])));
        assert!(af.is_conflict_free(&ArgSet::default()));
    }

    #[test]
    fn test_defends() {
        let af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert!(af.defends(&ArgSet::from_labels(&["a"]), &"c"));
        assert!(!af.defends(&ArgSet::default(), &"c"));
        assert!(af.defends(&ArgSet::default(), &"a"));
        assert!(!af.defends(&ArgSet::default(), &"z"));
    }

    #[test]
    fn test_is_complete() {
        let af = af_from(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert!(af.is_complete(&ArgSet::default()));
        assert!(af.is_complete(&ArgSet::from_labels(&["a"])));
        assert!(!af.is_complete(&ArgSet::from_labels(&["a", "b"])));
        assert!(!af.is_complete(&ArgSet::from_labels(&["z"])));
    }

    #[test]
    fn test_is_stable() {
        let af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]);
        assert!(af.is_stable(&ArgSet::from_labels(&["b"])));
        assert!(!af.is_stable(&ArgSet::from_labels(&["a"])));
        assert!(af.is_stable(&ArgSet::from_labels(&["a", "c"])));
    }

    #[test]
    fn test_traverse_order() {
        let af = af_from(&["a", "b", "c"], &[]);
        let mut visited = vec![];
        af.traverse(|s| visited.push(s.to_string()));
        assert_eq!(
            vec!["[]", "[a]", "[b]", "[a,b]", "[c]", "[a,c]", "[b,c]", "[a,b,c]"],
            visited
        );
    }

    #[test]
    fn test_traverse_empty_framework() {
        let af = af_from(&[], &[]);
        let mut n = 0;
        af.traverse(|s| {
            assert!(s.is_empty());
            n += 1
        });
        assert_eq!(1, n);
    }

    #[test]
    fn test_find_short_circuits() {
        let af = af_from(&["a", "b", "c"], &[]);
        let mut n_calls = 0;
        let found = af.find(|s| {
            n_calls += 1;
            s.len() == 2
        });
        assert_eq!(Some(ArgSet::from_labels(&["a", "b"])), found);
        assert_eq!(4, n_calls);
        assert!(af.find(|s| s.len() == 4).is_none());
    }
}
