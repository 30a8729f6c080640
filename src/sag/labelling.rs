use super::{ArgGraph, StatementId};
use crate::utils::Label;
use std::collections::HashMap;

/// A mapping from statements to labels.
///
/// Statements with no entry are undecided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labelling {
    labels: HashMap<StatementId, Label>,
}

impl Labelling {
    /// Builds the initial labelling of a graph.
    ///
    /// Assumed statements are `in`, and the other positions of their issue are `out`.
    /// Statements that are neither assumed nor concluded by an argument are `out`.
    /// Every other statement is left undecided.
    pub fn new_with_assumptions(graph: &ArgGraph) -> Self {
        let mut labelling = Labelling::default();
        for (id, stmt) in graph.iter_statements() {
            if stmt.is_assumed() {
                labelling.set(id, Label::In);
                if let Some(issue) = stmt.issue() {
                    graph
                        .issue(issue)
                        .positions()
                        .iter()
                        .filter(|p| **p != id)
                        .for_each(|p| labelling.set(*p, Label::Out));
                }
            }
        }
        for (id, stmt) in graph.iter_statements() {
            if !stmt.is_assumed() && stmt.args().is_empty() {
                labelling.set(id, Label::Out);
            }
        }
        labelling
    }

    /// Returns the label of a statement, `Undecided` if it has none.
    pub fn get(&self, stmt: StatementId) -> Label {
        self.labels.get(&stmt).copied().unwrap_or_default()
    }

    /// Sets the label of a statement.
    pub fn set(&mut self, stmt: StatementId, label: Label) {
        self.labels.insert(stmt, label);
    }

    /// Returns the number of statements with an explicit label.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` iff no statement has an explicit label.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
