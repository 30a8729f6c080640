use super::{ArgGraph, Argument, ArgumentId, Labelling};
use crate::utils::Label;
use anyhow::{anyhow, Result};
use std::fmt::Debug;
use std::rc::Rc;
use std::str::FromStr;
use strum_macros::EnumString;

/// The type of functions computing the weight of an argument.
pub type SchemeEvaluator = dyn Fn(&ArgGraph, &Argument, &Labelling) -> f64;

/// The type of functions checking an argument is an instance of a scheme.
pub type SchemeValidator = dyn Fn(&ArgGraph, &Argument) -> bool;

/// A user-defined scheme, given by its identifier, its evaluator and its validity predicate.
pub struct CustomScheme {
    id: String,
    eval: Box<SchemeEvaluator>,
    valid: Box<SchemeValidator>,
}

impl CustomScheme {
    /// Builds a custom scheme.
    pub fn new(id: &str, eval: Box<SchemeEvaluator>, valid: Box<SchemeValidator>) -> Self {
        CustomScheme {
            id: id.to_string(),
            eval,
            valid,
        }
    }
}

impl Debug for CustomScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomScheme").field("id", &self.id).finish()
    }
}

/// The schemes used to compute the weights of the arguments.
///
/// An argument with no scheme is weighed by the [`Linked`](Scheme::Linked) scheme.
#[derive(Debug, Clone, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Scheme {
    /// 1 if every premise is `in`, 0 otherwise.
    Linked,
    /// 1 if some premise is `in`, 0 otherwise.
    Convergent,
    /// The ratio of `in` premises.
    Cumulative,
    /// 0 if some premise is `out`; otherwise, the number of `in` premises divided by
    /// the maximal number of premises among the arguments for the positions of the issue of the conclusion.
    Factorised,
    /// A user-defined scheme.
    #[strum(disabled)]
    Custom(Rc<CustomScheme>),
}

impl Scheme {
    /// Returns the scheme associated with an identifier.
    ///
    /// Only built-in schemes can be retrieved this way; an error is returned for any other identifier.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::sag::Scheme;
    /// assert_eq!("cumulative", Scheme::from_id("cumulative").unwrap().id());
    /// assert!(Scheme::from_id("ad hominem").is_err());
    /// ```
    pub fn from_id(id: &str) -> Result<Self> {
        Scheme::from_str(id).map_err(|_| anyhow!(r#"unknown scheme "{}""#, id))
    }

    /// Returns the identifier of the scheme.
    pub fn id(&self) -> &str {
        match self {
            Scheme::Linked => "linked",
            Scheme::Convergent => "convergent",
            Scheme::Cumulative => "cumulative",
            Scheme::Factorised => "factorised",
            Scheme::Custom(c) => &c.id,
        }
    }

    /// Computes the weight of an argument given the labels of its premises.
    ///
    /// The result of custom evaluators is clamped to `[0,1]`; a non-finite result counts as 0.
    pub fn eval(&self, graph: &ArgGraph, arg: &Argument, labelling: &Labelling) -> f64 {
        let labels = arg
            .premises()
            .iter()
            .map(|p| labelling.get(p.stmt()))
            .collect::<Vec<Label>>();
        let n_in = labels.iter().filter(|l| **l == Label::In).count();
        match self {
            Scheme::Linked => {
                if labels.iter().all(|l| *l == Label::In) {
                    1.
                } else {
                    0.
                }
            }
            Scheme::Convergent => {
                if labels.iter().any(|l| *l == Label::In) {
                    1.
                } else {
                    0.
                }
            }
            Scheme::Cumulative => {
                if arg.premises().is_empty() {
                    1.
                } else {
                    n_in as f64 / arg.premises().len() as f64
                }
            }
            Scheme::Factorised => {
                if labels.iter().any(|l| *l == Label::Out) {
                    return 0.;
                }
                let max_premises = max_competing_premises(graph, arg);
                if max_premises == 0 {
                    1.
                } else {
                    n_in as f64 / max_premises as f64
                }
            }
            Scheme::Custom(c) => {
                let w = (c.eval)(graph, arg, labelling);
                if w.is_finite() {
                    w.clamp(0., 1.)
                } else {
                    0.
                }
            }
        }
    }

    /// Returns `true` iff the argument is an instance of this scheme.
    ///
    /// Built-in schemes accept any argument.
    pub fn is_valid(&self, graph: &ArgGraph, arg: &Argument) -> bool {
        match self {
            Scheme::Custom(c) => (c.valid)(graph, arg),
            _ => true,
        }
    }
}

// The maximal number of premises among the arguments competing with `arg`:
// those for the positions of the issue of its conclusion, or those for its conclusion if it is not a position.
fn max_competing_premises(graph: &ArgGraph, arg: &Argument) -> usize {
    let competing: Vec<ArgumentId> = match arg.conclusion() {
        Some(c) => match graph.statement(c).issue() {
            Some(i) => graph
                .issue(i)
                .positions()
                .iter()
                .flat_map(|p| graph.statement(*p).args())
                .copied()
                .collect(),
            None => graph.statement(c).args().to_vec(),
        },
        None => vec![],
    };
    competing
        .iter()
        .map(|a| graph.argument(*a).premises().len())
        .chain(std::iter::once(arg.premises().len()))
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sag::{Issue, Premise, Statement, StatementId};

    struct Fixture {
        graph: ArgGraph,
        stmts: Vec<StatementId>,
        labelling: Labelling,
    }

    // Statements `i1`, `i2` are in, `o` is out, `u` is undecided; `c1`, `c2` are the positions of an issue.
    fn fixture() -> Fixture {
        let mut graph = ArgGraph::default();
        let stmts = ["i1", "i2", "o", "u", "c1", "c2"]
            .iter()
            .map(|id| graph.add_statement(Statement::new(id)).unwrap())
            .collect::<Vec<StatementId>>();
        graph
            .add_issue(Issue::new("i"), &[stmts[4], stmts[5]])
            .unwrap();
        let mut labelling = Labelling::default();
        labelling.set(stmts[0], Label::In);
        labelling.set(stmts[1], Label::In);
        labelling.set(stmts[2], Label::Out);
        Fixture {
            graph,
            stmts,
            labelling,
        }
    }

    fn add_arg(f: &mut Fixture, id: &str, premises: &[usize], conclusion: usize) -> ArgumentId {
        let premises = premises
            .iter()
            .map(|i| Premise::new(f.stmts[*i]))
            .collect();
        f.graph
            .add_argument(
                Argument::new(id)
                    .with_premises(premises)
                    .with_conclusion(f.stmts[conclusion]),
            )
            .unwrap()
    }

    fn eval(f: &Fixture, scheme: Scheme, arg: ArgumentId) -> f64 {
        scheme.eval(&f.graph, f.graph.argument(arg), &f.labelling)
    }

    #[test]
    fn test_from_id() {
        for id in ["linked", "convergent", "cumulative", "factorised"] {
            assert_eq!(id, Scheme::from_id(id).unwrap().id());
        }
        assert_eq!(
            r#"unknown scheme "custom""#,
            Scheme::from_id("custom").unwrap_err().to_string()
        );
    }

    #[test]
    fn test_linked() {
        let mut f = fixture();
        let a1 = add_arg(&mut f, "a1", &[0, 1], 4);
        let a2 = add_arg(&mut f, "a2", &[0, 2], 4);
        let a3 = add_arg(&mut f, "a3", &[], 4);
        assert_eq!(1., eval(&f, Scheme::Linked, a1));
        assert_eq!(0., eval(&f, Scheme::Linked, a2));
        assert_eq!(1., eval(&f, Scheme::Linked, a3));
    }

    #[test]
    fn test_convergent() {
        let mut f = fixture();
        let a1 = add_arg(&mut f, "a1", &[2, 1], 4);
        let a2 = add_arg(&mut f, "a2", &[2, 3], 4);
        let a3 = add_arg(&mut f, "a3", &[], 4);
        assert_eq!(1., eval(&f, Scheme::Convergent, a1));
        assert_eq!(0., eval(&f, Scheme::Convergent, a2));
        assert_eq!(0., eval(&f, Scheme::Convergent, a3));
    }

    #[test]
    fn test_cumulative() {
        let mut f = fixture();
        let a1 = add_arg(&mut f, "a1", &[0, 2, 1, 3], 4);
        let a2 = add_arg(&mut f, "a2", &[], 4);
        assert_eq!(0.5, eval(&f, Scheme::Cumulative, a1));
        assert_eq!(1., eval(&f, Scheme::Cumulative, a2));
    }

    #[test]
    fn test_factorised() {
        let mut f = fixture();
        let a1 = add_arg(&mut f, "a1", &[0], 4);
        let a2 = add_arg(&mut f, "a2", &[0, 1, 3, 3], 5);
        let a3 = add_arg(&mut f, "a3", &[0, 2], 5);
        assert_eq!(0.25, eval(&f, Scheme::Factorised, a1));
        assert_eq!(0.5, eval(&f, Scheme::Factorised, a2));
        assert_eq!(0., eval(&f, Scheme::Factorised, a3));
    }

    #[test]
    fn test_factorised_not_a_position() {
        let mut f = fixture();
        let a1 = add_arg(&mut f, "a1", &[0], 3);
        let a2 = add_arg(&mut f, "a2", &[0, 1], 3);
        let a3 = add_arg(&mut f, "a3", &[], 2);
        assert_eq!(0.5, eval(&f, Scheme::Factorised, a1));
        assert_eq!(1., eval(&f, Scheme::Factorised, a2));
        assert_eq!(1., eval(&f, Scheme::Factorised, a3));
    }

    #[test]
    fn test_custom() {
        let mut f = fixture();
        let a1 = add_arg(&mut f, "a1", &[0], 4);
        let custom = Scheme::Custom(Rc::new(CustomScheme::new(
            "double",
            Box::new(|_: &ArgGraph, a: &Argument, _: &Labelling| {
                2. * a.premises().len() as f64
            }),
            Box::new(|_: &ArgGraph, a: &Argument| a.premises().len() == 1),
        )));
        assert_eq!("double", custom.id());
        assert_eq!(1., eval(&f, custom.clone(), a1));
        assert!(custom.is_valid(&f.graph, f.graph.argument(a1)));
        let a2 = Argument::new("a2").with_scheme(custom);
        assert!(f.graph.add_argument(a2).is_err());
    }

    #[test]
    fn test_custom_non_finite_weight() {
        let mut f = fixture();
        let a1 = add_arg(&mut f, "a1", &[0], 4);
        let nan = Scheme::Custom(Rc::new(CustomScheme::new(
            "nan",
            Box::new(|_: &ArgGraph, _: &Argument, _: &Labelling| f64::NAN),
            Box::new(|_: &ArgGraph, _: &Argument| true),
        )));
        assert_eq!(0., eval(&f, nan, a1));
        let inf = Scheme::Custom(Rc::new(CustomScheme::new(
            "inf",
            Box::new(|_: &ArgGraph, _: &Argument, _: &Labelling| f64::INFINITY),
            Box::new(|_: &ArgGraph, _: &Argument| true),
        )));
        assert_eq!(0., eval(&f, inf, a1));
    }
}
