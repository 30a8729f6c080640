use super::GraphWriter;
use crate::sag::{ArgGraph, StatementId};
use crate::utils::Label;
use anyhow::{Context, Result};
use std::io::Write;

fn color(label: Label) -> &'static str {
    match label {
        Label::In => "palegreen",
        Label::Out => "lightpink",
        Label::Undecided => "lightyellow",
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// A writer exporting Structured Argument Graphs to the DOT language of Graphviz.
///
/// Statements are drawn as boxes, arguments as ellipses and issues as hexagons.
/// Statements are filled according to their label: green for `in`, red for `out` and yellow for `undecided`.
/// Edges go from premises to arguments, from arguments to their conclusion and from issues to their positions;
/// undercutters are linked to their arguments with dashed edges.
///
/// # Example
///
/// ```
/// # use carneades::io::{DotWriter, GraphWriter};
/// # use carneades::sag::{ArgGraph, Statement};
/// let mut graph = ArgGraph::default();
/// graph.add_statement(Statement::new("p")).unwrap();
/// let mut buffer = Vec::new();
/// DotWriter::default().write_graph(&graph, &mut buffer).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().starts_with("digraph"));
/// ```
#[derive(Default)]
pub struct DotWriter;

impl GraphWriter for DotWriter {
    fn write_graph(&self, graph: &ArgGraph, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a DOT document";
        let stmt_node = |s: StatementId| quote(&format!("s:{}", graph.statement(s).id()));
        writeln!(writer, "digraph {{").context(context)?;
        writeln!(writer, "    rankdir=RL;").context(context)?;
        for (id, stmt) in graph.iter_statements() {
            let text = if stmt.text().is_empty() {
                stmt.id()
            } else {
                stmt.text()
            };
            writeln!(
                writer,
                "    {} [shape=box, style=filled, fillcolor={}, label={}];",
                stmt_node(id),
                color(stmt.label()),
                quote(text)
            )
            .context(context)?;
        }
        for (_, issue) in graph.iter_issues() {
            let node = quote(&format!("i:{}", issue.id()));
            writeln!(
                writer,
                "    {} [shape=hexagon, label={}];",
                node,
                quote(&format!("{} ({})", issue.id(), issue.standard()))
            )
            .context(context)?;
            for p in issue.positions() {
                writeln!(writer, "    {} -> {} [arrowhead=none];", node, stmt_node(*p))
                    .context(context)?;
            }
        }
        for (_, arg) in graph.iter_arguments() {
            let node = quote(&format!("a:{}", arg.id()));
            let label = match arg.scheme() {
                Some(s) => format!("{} [{}] {}", arg.id(), s.id(), arg.weight()),
                None => format!("{} {}", arg.id(), arg.weight()),
            };
            writeln!(writer, "    {} [shape=ellipse, label={}];", node, quote(&label))
                .context(context)?;
            for p in arg.premises() {
                let attributes = if p.role().is_empty() {
                    String::new()
                } else {
                    format!(" [label={}]", quote(p.role()))
                };
                writeln!(writer, "    {} -> {}{};", stmt_node(p.stmt()), node, attributes)
                    .context(context)?;
            }
            if let Some(c) = arg.conclusion() {
                writeln!(writer, "    {} -> {};", node, stmt_node(c)).context(context)?;
            }
            if let Some(u) = arg.undercutter() {
                writeln!(writer, "    {} -> {} [style=dashed];", stmt_node(u), node)
                    .context(context)?;
            }
        }
        writeln!(writer, "}}").context(context)?;
        writer.flush().context(context)
    }
}
