use super::{ArgGraph, ArgumentId, IssueId, Labelling, Scheme, StatementId};
use crate::utils::Label;
use log::debug;

/// Evaluation of Structured Argument Graphs.
///
/// All the functions of this block are total: they never fail on a graph built with the builder methods.
/// Handles coming from another graph make them panic.
impl ArgGraph {
    /// Returns the label of the undercutter of an argument, or `out` if it has none.
    pub fn undercut(&self, arg: ArgumentId, labelling: &Labelling) -> Label {
        match self.argument(arg).undercutter() {
            Some(u) => labelling.get(u),
            None => Label::Out,
        }
    }

    /// Returns `true` iff the argument is not undercut and none of its premises is undecided.
    ///
    /// Premises labelled `out` do not prevent an argument from being applicable.
    pub fn is_applicable(&self, arg: ArgumentId, labelling: &Labelling) -> bool {
        self.undercut(arg, labelling) == Label::Out
            && self
                .argument(arg)
                .premises()
                .iter()
                .all(|p| labelling.get(p.stmt()) != Label::Undecided)
    }

    /// Returns the weight of an argument.
    ///
    /// The weight is 0 if the argument is undercut or not applicable;
    /// otherwise, it is computed by the scheme of the argument ([`Scheme::Linked`] if it has none).
    pub fn argument_weight(&self, arg: ArgumentId, labelling: &Labelling) -> f64 {
        if self.undercut(arg, labelling) == Label::In || !self.is_applicable(arg, labelling) {
            return 0.;
        }
        let argument = self.argument(arg);
        argument
            .scheme()
            .unwrap_or(&Scheme::Linked)
            .eval(self, argument, labelling)
    }

    fn max_arg_weight(&self, stmt: StatementId, labelling: &Labelling) -> f64 {
        self.statement(stmt)
            .args()
            .iter()
            .map(|a| self.argument_weight(*a, labelling))
            .fold(0., f64::max)
    }

    fn is_undercut_or_applicable(&self, arg: ArgumentId, labelling: &Labelling) -> bool {
        self.undercut(arg, labelling) == Label::In || self.is_applicable(arg, labelling)
    }

    /// Returns `true` iff some argument concluding the statement has a positive weight.
    pub fn is_supported(&self, stmt: StatementId, labelling: &Labelling) -> bool {
        self.max_arg_weight(stmt, labelling) > 0.
    }

    /// Returns `true` iff every argument concluding the statement is either undercut or applicable,
    /// and none of them has a positive weight.
    pub fn is_unsupported(&self, stmt: StatementId, labelling: &Labelling) -> bool {
        self.statement(stmt)
            .args()
            .iter()
            .all(|a| self.is_undercut_or_applicable(*a, labelling))
            && !self.is_supported(stmt, labelling)
    }

    /// Returns `true` iff every argument for every position of the issue is either undercut or applicable.
    pub fn is_ready_to_be_resolved(&self, issue: IssueId, labelling: &Labelling) -> bool {
        self.issue(issue).positions().iter().all(|p| {
            self.statement(*p)
                .args()
                .iter()
                .all(|a| self.is_undercut_or_applicable(*a, labelling))
        })
    }

    /// Labels the positions of an issue according to its proof standard.
    ///
    /// A position wins if the maximal weight of its arguments is positive and greater (in the sense of the proof standard)
    /// than the maximal weight of the arguments of every other position.
    /// The winner, if any, is labelled `in`; every other position is labelled `out`.
    pub fn resolve_issue(&self, issue: IssueId, labelling: &mut Labelling) {
        let issue = self.issue(issue);
        let weights = issue
            .positions()
            .iter()
            .map(|p| self.max_arg_weight(*p, labelling))
            .collect::<Vec<f64>>();
        let winner = (0..weights.len()).find(|i| {
            weights[*i] > 0.
                && (0..weights.len())
                    .filter(|j| j != i)
                    .all(|j| issue.standard().greater(weights[*i], weights[j]))
        });
        debug!(
            "issue {} resolved with winner {}",
            issue.id(),
            winner
                .map(|i| self.statement(issue.positions()[i]).id())
                .unwrap_or("<none>")
        );
        issue.positions().iter().enumerate().for_each(|(i, p)| {
            labelling.set(
                *p,
                if Some(i) == winner {
                    Label::In
                } else {
                    Label::Out
                },
            )
        });
    }

    /// Computes the grounded labelling of the graph.
    ///
    /// The labelling starts from the [assumptions](Labelling::new_with_assumptions).
    /// Then, passes are made over the undecided statements until no label changes:
    /// a statement which is not a position becomes `in` if it is supported and `out` if it is unsupported,
    /// and the issue of a position is resolved as soon as it is ready to be.
    ///
    /// The graph is expected to be [consistent](Self::check_consistency); a warning is logged if it is not.
    pub fn grounded_labelling(&self) -> Labelling {
        self.warn_if_inconsistent();
        let mut labelling = Labelling::new_with_assumptions(self);
        let mut n_passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            n_passes += 1;
            for (id, stmt) in self.iter_statements() {
                if labelling.get(id) != Label::Undecided {
                    continue;
                }
                match stmt.issue() {
                    None => {
                        if self.is_supported(id, &labelling) {
                            labelling.set(id, Label::In);
                            changed = true;
                        } else if self.is_unsupported(id, &labelling) {
                            labelling.set(id, Label::Out);
                            changed = true;
                        }
                    }
                    Some(issue) => {
                        if self.is_ready_to_be_resolved(issue, &labelling) {
                            self.resolve_issue(issue, &mut labelling);
                            changed = true;
                        }
                    }
                }
            }
        }
        debug!("grounded labelling computed in {} pass(es)", n_passes);
        labelling
    }

    /// Writes the labels of a labelling into the statements, and the corresponding weights into the arguments.
    pub fn apply_labelling(&mut self, labelling: &Labelling) {
        let labels = self
            .iter_statements()
            .map(|(id, _)| labelling.get(id))
            .collect();
        let weights = self
            .iter_arguments()
            .map(|(id, _)| self.argument_weight(id, labelling))
            .collect();
        self.set_results(labels, weights);
    }
}
