use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use carneades::utils::Label;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "eval";

const ARG_FROM: &str = "FROM";
const ARG_TO: &str = "TO";

pub(crate) struct EvalCommand;

impl EvalCommand {
    pub(crate) fn new() -> Self {
        EvalCommand
    }
}

impl<'a> Command<'a> for EvalCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Evaluates a structured argument graph and exports the result")
            .setting(AppSettings::DisableVersion)
            .arg(common::positional_input_arg())
            .arg(
                Arg::with_name(ARG_FROM)
                    .short("f")
                    .long("from")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&common::SAG_INPUT_FORMATS)
                    .default_value("yaml")
                    .help("the input file format")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_TO)
                    .short("t")
                    .long("to")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&common::SAG_OUTPUT_FORMATS)
                    .default_value("yaml")
                    .help("the output format")
                    .required(false),
            )
            .arg(common::output_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let reader = common::new_graph_reader(arg_matches.value_of(ARG_FROM).unwrap());
        let mut graph = common::read_graph_file_path(file, reader.as_ref())?;
        graph
            .check_consistency()
            .context("the argument graph is inconsistent")?;
        let labelling = graph.grounded_labelling();
        graph.apply_labelling(&labelling);
        let n_in = graph
            .iter_statements()
            .filter(|(_, s)| s.label() == Label::In)
            .count();
        info!(
            "{} statement(s) out of {} are accepted",
            n_in,
            graph.n_statements()
        );
        let writer = common::new_graph_writer(arg_matches.value_of(ARG_TO).unwrap());
        let mut out = common::open_output(arg_matches)?;
        writer.write_graph(&graph, &mut out)
    }
}
