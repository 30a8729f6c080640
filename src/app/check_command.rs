use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use carneades::io::TgfReader;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "check";

const ARG_READER: &str = "READER";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input AF or argument graph files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_READER)
                    .short("r")
                    .long("reader")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["tgf", "yaml", "json"])
                    .default_value("tgf")
                    .help("the input file format")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        match arg_matches.value_of(ARG_READER).unwrap() {
            "tgf" => common::read_af_file_path(file, &mut TgfReader::default()).map(|_| ()),
            format => {
                let graph =
                    common::read_graph_file_path(file, common::new_graph_reader(format).as_ref())?;
                graph
                    .check_consistency()
                    .context("the argument graph is inconsistent")?;
                info!("the argument graph is consistent");
                Ok(())
            }
        }
    }
}
