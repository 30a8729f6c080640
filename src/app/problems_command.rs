use super::{cli_manager, command::Command};
use anyhow::Result;
use carneades::aa::Query;
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "problems";

pub(crate) struct ProblemsCommand;

impl ProblemsCommand {
    pub(crate) fn new() -> Self {
        ProblemsCommand
    }
}

/// Formats the problems handled by the solver as a bracketed, comma-separated list.
pub(crate) fn problem_list() -> String {
    let problems = Query::iter_problem_strings().collect::<Vec<String>>();
    format!("[{}]", problems.join(","))
}

impl<'a> Command<'a> for ProblemsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the problems handled by the solver")
            .setting(AppSettings::DisableVersion)
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        println!("{}", problem_list());
        Ok(())
    }
}
