use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, DungCommand,
    EvalCommand, IccmaCommand, ProblemsCommand,
};
use anyhow::{Context, Result};
use carneades::{
    aa::AAFramework,
    io::{
        DotWriter, GraphReader, GraphWriter, InstanceReader, JsonReader, JsonWriter, YamlReader,
        YamlWriter,
    },
    sag::ArgGraph,
    utils::LabelType,
};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::PathBuf,
};

pub(crate) const AUTHORS: &str = "Carneades contributors";

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        AUTHORS,
        "Carneades, an evaluator for abstract and structured argumentation graphs.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, AUTHORS)),
        Box::new(CheckCommand::new()),
        Box::new(DungCommand::new()),
        Box::new(EvalCommand::new()),
        Box::new(IccmaCommand::new()),
        Box::new(ProblemsCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

/// The input file, given by the `-f` option.
pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file")
        .required(true)
}

/// The input file, given as the first positional argument.
pub(crate) fn positional_input_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .index(1)
        .empty_values(false)
        .multiple(false)
        .help("the input file")
        .required(true)
}

pub(crate) const ARG_OUTPUT: &str = "OUTPUT";

pub(crate) fn output_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_OUTPUT)
        .short("o")
        .long("output")
        .empty_values(false)
        .multiple(false)
        .help("the output file (defaults to the standard output)")
        .required(false)
}

pub(crate) const AF_FORMATS: [&str; 1] = ["tgf"];
pub(crate) const SAG_INPUT_FORMATS: [&str; 2] = ["yaml", "json"];
pub(crate) const SAG_OUTPUT_FORMATS: [&str; 3] = ["yaml", "json", "dot"];

pub(crate) fn new_graph_reader(format: &str) -> Box<dyn GraphReader> {
    match format {
        "yaml" => Box::<YamlReader>::default(),
        "json" => Box::<JsonReader>::default(),
        _ => unreachable!(),
    }
}

pub(crate) fn new_graph_writer(format: &str) -> Box<dyn GraphWriter> {
    match format {
        "yaml" => Box::<YamlWriter>::default(),
        "json" => Box::<JsonWriter>::default(),
        "dot" => Box::<DotWriter>::default(),
        _ => unreachable!(),
    }
}

pub(crate) fn read_af_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<AAFramework<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let af = read_file_path_with(file_path, &|r| reader.read(r))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

pub(crate) fn read_graph_file_path(file_path: &str, reader: &dyn GraphReader) -> Result<ArgGraph> {
    let graph = read_file_path_with(file_path, &|r| reader.read_graph(r))?;
    info!(
        "the argument graph has {} statement(s), {} issue(s) and {} argument(s)",
        graph.n_statements(),
        graph.n_issues(),
        graph.n_arguments(),
    );
    Ok(graph)
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let file = File::open(&canonicalized)
        .with_context(|| format!(r#"while opening file "{}""#, file_path))?;
    let mut file_reader = BufReader::new(file);
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

/// Opens the output given by the `-o` option, or the standard output if it is absent.
pub(crate) fn open_output(arg_matches: &ArgMatches<'_>) -> Result<Box<dyn Write>> {
    match arg_matches.value_of(ARG_OUTPUT) {
        Some(path) => {
            info!("writing output file {:?}", path);
            let file = File::create(path)
                .with_context(|| format!(r#"while creating file "{}""#, path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
