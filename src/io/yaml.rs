use super::{GraphReader, GraphWriter};
use crate::sag::{ArgGraph, Argument, Issue, Metadata, Premise, ProofStandard, Scheme, Statement};
use crate::utils::Label;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};

#[derive(Debug, Default, Serialize, Deserialize)]
struct YamlGraph {
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    metadata: Metadata,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    issues: BTreeMap<String, YamlIssue>,
    #[serde(default)]
    statements: BTreeMap<String, YamlStatement>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    arguments: BTreeMap<String, YamlArgument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    assumptions: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    references: BTreeMap<String, Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<YamlLabels>,
}

#[derive(Debug, Serialize, Deserialize)]
struct YamlIssue {
    #[serde(default)]
    positions: Vec<String>,
    #[serde(default)]
    standard: ProofStandard,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    metadata: Metadata,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum YamlStatement {
    Text(String),
    Full {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        assumed: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<Label>,
        #[serde(default, skip_serializing_if = "Metadata::is_empty")]
        metadata: Metadata,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum YamlPremises {
    List(Vec<YamlPremise>),
    Roles(BTreeMap<String, String>),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum YamlPremise {
    Stmt(String),
    WithRole { stmt: String, role: String },
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct YamlArgument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    premises: Option<YamlPremises>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conclusion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    undercutter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    metadata: Metadata,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct YamlLabels {
    #[serde(default, rename = "in")]
    in_: Vec<String>,
    #[serde(default)]
    out: Vec<String>,
    #[serde(default)]
    undecided: Vec<String>,
}

fn build_graph(doc: YamlGraph) -> Result<ArgGraph> {
    let mut graph = ArgGraph::default();
    graph.set_metadata(doc.metadata);
    let mut labels = BTreeMap::new();
    if let Some(l) = doc.labels {
        for (label, ids) in [
            (Label::In, l.in_),
            (Label::Out, l.out),
            (Label::Undecided, l.undecided),
        ] {
            ids.into_iter().for_each(|id| {
                labels.insert(id, label);
            });
        }
    }
    for (id, stmt) in doc.statements {
        let mut statement = Statement::new(&id);
        match stmt {
            YamlStatement::Text(text) => statement = statement.with_text(&text),
            YamlStatement::Full {
                text,
                assumed,
                label,
                metadata,
            } => {
                statement = statement
                    .with_text(&text)
                    .with_assumed(assumed)
                    .with_metadata(metadata);
                if let Some(l) = label {
                    statement = statement.with_label(l);
                }
            }
        }
        if let Some(l) = labels.remove(&id) {
            statement = statement.with_label(l);
        }
        graph.add_statement(statement)?;
    }
    if let Some(id) = labels.keys().next() {
        return Err(anyhow!("no such statement: {}", id)).context("while reading the labels");
    }
    for (id, issue) in doc.issues {
        let context = || format!("while reading issue {}", id);
        let positions = issue
            .positions
            .iter()
            .map(|p| graph.statement_id(p))
            .collect::<Result<Vec<_>>>()
            .with_context(context)?;
        graph.add_issue(
            Issue::new(&id)
                .with_standard(issue.standard)
                .with_metadata(issue.metadata),
            &positions,
        )?;
    }
    for id in doc.assumptions {
        let stmt = graph
            .statement_id(&id)
            .context("while reading the assumptions")?;
        graph.set_assumed(stmt, true);
    }
    for (id, arg) in doc.arguments {
        let context = || format!("while reading argument {}", id);
        let premises = match arg.premises {
            None => vec![],
            Some(YamlPremises::List(l)) => l
                .iter()
                .map(|p| match p {
                    YamlPremise::Stmt(s) => graph.statement_id(s).map(Premise::new),
                    YamlPremise::WithRole { stmt, role } => graph
                        .statement_id(stmt)
                        .map(|s| Premise::with_role(s, role)),
                })
                .collect::<Result<Vec<_>>>()
                .with_context(context)?,
            Some(YamlPremises::Roles(m)) => m
                .iter()
                .map(|(role, p)| graph.statement_id(p).map(|s| Premise::with_role(s, role)))
                .collect::<Result<Vec<_>>>()
                .with_context(context)?,
        };
        let mut argument = Argument::new(&id)
            .with_premises(premises)
            .with_metadata(arg.metadata);
        if let Some(s) = arg.scheme {
            argument = argument.with_scheme(Scheme::from_id(&s).with_context(context)?);
        }
        if let Some(c) = arg.conclusion {
            argument = argument.with_conclusion(graph.statement_id(&c).with_context(context)?);
        }
        if let Some(u) = arg.undercutter {
            argument = argument.with_undercutter(graph.statement_id(&u).with_context(context)?);
        }
        if let Some(w) = arg.weight {
            argument = argument.with_weight(w);
        }
        graph.add_argument(argument)?;
    }
    doc.references
        .into_iter()
        .for_each(|(key, r)| graph.add_reference(&key, r));
    Ok(graph)
}

fn build_document(graph: &ArgGraph) -> YamlGraph {
    let mut doc = YamlGraph {
        metadata: graph.metadata().clone(),
        references: graph.references().clone(),
        labels: Some(YamlLabels::default()),
        ..Default::default()
    };
    for (_, stmt) in graph.iter_statements() {
        let yaml_stmt = if stmt.metadata().is_empty() {
            YamlStatement::Text(stmt.text().to_string())
        } else {
            YamlStatement::Full {
                text: stmt.text().to_string(),
                assumed: false,
                label: None,
                metadata: stmt.metadata().clone(),
            }
        };
        doc.statements.insert(stmt.id().to_string(), yaml_stmt);
        if stmt.is_assumed() {
            doc.assumptions.push(stmt.id().to_string());
        }
        if let Some(labels) = doc.labels.as_mut() {
            let id = stmt.id().to_string();
            match stmt.label() {
                Label::In => labels.in_.push(id),
                Label::Out => labels.out.push(id),
                Label::Undecided => labels.undecided.push(id),
            }
        }
    }
    let stmt_id = |s| graph.statement(s).id().to_string();
    for (_, issue) in graph.iter_issues() {
        doc.issues.insert(
            issue.id().to_string(),
            YamlIssue {
                positions: issue.positions().iter().map(|p| stmt_id(*p)).collect(),
                standard: issue.standard(),
                metadata: issue.metadata().clone(),
            },
        );
    }
    for (_, arg) in graph.iter_arguments() {
        let premises = if arg.premises().is_empty() {
            None
        } else {
            Some(YamlPremises::List(
                arg.premises()
                    .iter()
                    .map(|p| {
                        if p.role().is_empty() {
                            YamlPremise::Stmt(stmt_id(p.stmt()))
                        } else {
                            YamlPremise::WithRole {
                                stmt: stmt_id(p.stmt()),
                                role: p.role().to_string(),
                            }
                        }
                    })
                    .collect(),
            ))
        };
        doc.arguments.insert(
            arg.id().to_string(),
            YamlArgument {
                scheme: arg.scheme().map(|s| s.id().to_string()),
                premises,
                conclusion: arg.conclusion().map(stmt_id),
                undercutter: arg.undercutter().map(stmt_id),
                weight: if arg.weight() > 0. {
                    Some(arg.weight())
                } else {
                    None
                },
                metadata: arg.metadata().clone(),
            },
        );
    }
    doc
}

/// A reader for Structured Argument Graphs written in YAML.
///
/// The document may contain the following top-level keys, each one being optional:
///   * `metadata`: a map of free-form values
///   * `statements`: a map from statement identifiers to their text, or to a map with keys `text`, `assumed`, `label` and `metadata`
///   * `issues`: a map from issue identifiers to a map with keys `positions`, `standard` (`DV`, `PE`, `CCE` or `BRD`, defaults to `PE`) and `metadata`
///   * `arguments`: a map from argument identifiers to a map with keys `scheme`, `premises` (a list whose items are statements or `{stmt, role}` maps, or a map from roles to statements),
///     `conclusion`, `undercutter`, `weight` and `metadata`
///   * `assumptions`: a list of assumed statements
///   * `references`: a map from keys to bibliographic metadata
///   * `labels`: a map with keys `in`, `out` and `undecided`, each one listing statements
///
/// Entities are sorted by identifier.
///
/// # Example
///
/// ```
/// # use carneades::io::{GraphReader, YamlReader};
/// let yaml = r#"
/// statements:
///   bird: Tweety is a bird.
///   flies: Tweety flies.
/// arguments:
///   a1:
///     premises: [bird]
///     conclusion: flies
/// assumptions: [bird]
/// "#;
/// let graph = YamlReader::default().read_graph(&mut yaml.as_bytes()).unwrap();
/// assert_eq!(2, graph.n_statements());
/// ```
#[derive(Default)]
pub struct YamlReader;

impl GraphReader for YamlReader {
    fn read_graph(&self, reader: &mut dyn Read) -> Result<ArgGraph> {
        let doc: YamlGraph =
            serde_yaml::from_reader(reader).context("while parsing a YAML document")?;
        build_graph(doc)
    }
}

/// A writer for Structured Argument Graphs written in YAML.
///
/// The format is the one read by [`YamlReader`]; the labels of the statements are written in the `labels` section.
#[derive(Default)]
pub struct YamlWriter;

impl GraphWriter for YamlWriter {
    fn write_graph(&self, graph: &ArgGraph, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a YAML document";
        serde_yaml::to_writer(&mut *writer, &build_document(graph)).context(context)?;
        writer.flush().context(context)
    }
}
