use super::{GraphReader, GraphWriter};
use crate::sag::{ArgGraph, Argument, Issue, Metadata, Premise, ProofStandard, Scheme, Statement};
use crate::utils::Label;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonGraph {
    #[serde(default)]
    metadata: Metadata,
    #[serde(default)]
    statements: Vec<JsonStatement>,
    #[serde(default)]
    issues: Vec<JsonIssue>,
    #[serde(default)]
    arguments: Vec<JsonArgument>,
    #[serde(default)]
    references: BTreeMap<String, Metadata>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonStatement {
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    assumed: bool,
    #[serde(default)]
    label: Label,
    #[serde(default)]
    metadata: Metadata,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonIssue {
    id: String,
    #[serde(default)]
    positions: Vec<String>,
    #[serde(default)]
    standard: ProofStandard,
    #[serde(default)]
    metadata: Metadata,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonPremise {
    stmt: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    role: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonArgument {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
    #[serde(default)]
    premises: Vec<JsonPremise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conclusion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    undercutter: Option<String>,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    metadata: Metadata,
}

fn build_graph(doc: JsonGraph) -> Result<ArgGraph> {
    let mut graph = ArgGraph::default();
    graph.set_metadata(doc.metadata);
    for s in doc.statements {
        graph.add_statement(
            Statement::new(&s.id)
                .with_text(&s.text)
                .with_assumed(s.assumed)
                .with_label(s.label)
                .with_metadata(s.metadata),
        )?;
    }
    for i in doc.issues {
        let positions = i
            .positions
            .iter()
            .map(|p| graph.statement_id(p))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("while reading issue {}", i.id))?;
        graph.add_issue(
            Issue::new(&i.id)
                .with_standard(i.standard)
                .with_metadata(i.metadata),
            &positions,
        )?;
    }
    for a in doc.arguments {
        let context = || format!("while reading argument {}", a.id);
        let premises = a
            .premises
            .iter()
            .map(|p| {
                graph
                    .statement_id(&p.stmt)
                    .map(|s| Premise::with_role(s, &p.role))
            })
            .collect::<Result<Vec<_>>>()
            .with_context(context)?;
        let mut argument = Argument::new(&a.id)
            .with_premises(premises)
            .with_weight(a.weight)
            .with_metadata(a.metadata.clone());
        if let Some(s) = &a.scheme {
            argument = argument.with_scheme(Scheme::from_id(s).with_context(context)?);
        }
        if let Some(c) = &a.conclusion {
            argument = argument.with_conclusion(graph.statement_id(c).with_context(context)?);
        }
        if let Some(u) = &a.undercutter {
            argument = argument.with_undercutter(graph.statement_id(u).with_context(context)?);
        }
        graph.add_argument(argument)?;
    }
    doc.references
        .into_iter()
        .for_each(|(key, r)| graph.add_reference(&key, r));
    Ok(graph)
}

fn build_document(graph: &ArgGraph) -> JsonGraph {
    let stmt_id = |s| graph.statement(s).id().to_string();
    JsonGraph {
        metadata: graph.metadata().clone(),
        statements: graph
            .iter_statements()
            .map(|(_, s)| JsonStatement {
                id: s.id().to_string(),
                text: s.text().to_string(),
                assumed: s.is_assumed(),
                label: s.label(),
                metadata: s.metadata().clone(),
            })
            .collect(),
        issues: graph
            .iter_issues()
            .map(|(_, i)| JsonIssue {
                id: i.id().to_string(),
                positions: i.positions().iter().map(|p| stmt_id(*p)).collect(),
                standard: i.standard(),
                metadata: i.metadata().clone(),
            })
            .collect(),
        arguments: graph
            .iter_arguments()
            .map(|(_, a)| JsonArgument {
                id: a.id().to_string(),
                scheme: a.scheme().map(|s| s.id().to_string()),
                premises: a
                    .premises()
                    .iter()
                    .map(|p| JsonPremise {
                        stmt: stmt_id(p.stmt()),
                        role: p.role().to_string(),
                    })
                    .collect(),
                conclusion: a.conclusion().map(stmt_id),
                undercutter: a.undercutter().map(stmt_id),
                weight: a.weight(),
                metadata: a.metadata().clone(),
            })
            .collect(),
        references: graph.references().clone(),
    }
}

/// A reader for Structured Argument Graphs written in JSON.
///
/// The document mirrors the data model: an object with the keys `metadata`, `statements`, `issues`, `arguments` and `references`,
/// where entities are given as lists of objects identified by their `id` field.
///
/// # Example
///
/// ```
/// # use carneades::io::{GraphReader, JsonReader};
/// let json = r#"{"statements": [{"id": "p", "assumed": true}, {"id": "q"}],
///                "arguments": [{"id": "a", "premises": [{"stmt": "p"}], "conclusion": "q"}]}"#;
/// let graph = JsonReader::default().read_graph(&mut json.as_bytes()).unwrap();
/// assert_eq!(1, graph.n_arguments());
/// ```
#[derive(Default)]
pub struct JsonReader;

impl GraphReader for JsonReader {
    fn read_graph(&self, reader: &mut dyn Read) -> Result<ArgGraph> {
        let doc: JsonGraph =
            serde_json::from_reader(reader).context("while parsing a JSON document")?;
        build_graph(doc)
    }
}

/// A writer for Structured Argument Graphs written in JSON.
///
/// The format is the one read by [`JsonReader`], pretty-printed.
#[derive(Default)]
pub struct JsonWriter;

impl GraphWriter for JsonWriter {
    fn write_graph(&self, graph: &ArgGraph, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a JSON document";
        serde_json::to_writer_pretty(&mut *writer, &build_document(graph)).context(context)?;
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }
}
