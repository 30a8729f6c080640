use super::{cli_manager, command::Command, common, problems_command};
use anyhow::{anyhow, Context, Result};
use carneades::{
    aa::{read_problem_string, Query},
    io::{IccmaWriter, InstanceReader, ResponseWriter, TgfReader},
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::warn;

const CMD_NAME: &str = "iccma";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_FORMAT: &str = "FORMAT";
const ARG_ARG: &str = "ARG";
const ARG_PROBLEMS: &str = "PROBLEMS";
const ARG_FORMATS: &str = "FORMATS";

pub(crate) struct IccmaCommand;

impl IccmaCommand {
    pub(crate) fn new() -> Self {
        IccmaCommand
    }
}

impl<'a> Command<'a> for IccmaCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation problem with the ICCMA command line conventions")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve")
                    .required_unless_one(&[ARG_PROBLEMS, ARG_FORMATS]),
            )
            .arg(common::input_args().required_unless_one(&[ARG_PROBLEMS, ARG_FORMATS]))
            .arg(
                Arg::with_name(ARG_FORMAT)
                    .long("fo")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&common::AF_FORMATS)
                    .default_value("tgf")
                    .help("the input file format")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_PROBLEMS)
                    .long("problems")
                    .conflicts_with(ARG_FORMATS)
                    .help("displays the supported problems"),
            )
            .arg(
                Arg::with_name(ARG_FORMATS)
                    .long("formats")
                    .help("displays the supported input formats"),
            )
            .arg(cli_manager::logging_level_cli_arg_with_default_value("off"))
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        if arg_matches.is_present(ARG_PROBLEMS) {
            println!("{}", problems_command::problem_list());
            return Ok(());
        }
        if arg_matches.is_present(ARG_FORMATS) {
            println!("[{}]", common::AF_FORMATS.join(","));
            return Ok(());
        }
        let (query, semantics) = read_problem_string(arg_matches.value_of(ARG_PROBLEM).unwrap())?;
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = TgfReader::default();
        let af = common::read_af_file_path(file, &mut reader)?;
        let arg = arg_matches
            .value_of(ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        let writer = IccmaWriter::default();
        let mut out = std::io::stdout();
        if !query.requires_argument() && arg.is_some() {
            warn!(
                "unexpected argument on the command line (useless for query {})",
                query.as_ref()
            );
        }
        match (query, arg) {
            (Query::DC, Some(a)) => ResponseWriter::<String>::write_acceptance_status(
                &writer,
                &mut out,
                af.credulously_inferred(semantics, a.label()),
            ),
            (Query::DS, Some(a)) => ResponseWriter::<String>::write_acceptance_status(
                &writer,
                &mut out,
                af.skeptically_inferred(semantics, a.label()),
            ),
            (Query::DC | Query::DS, None) => Err(anyhow!(
                "missing argument on the command line (required for query {})",
                query.as_ref()
            )),
            (Query::EE, _) => writer.write_extensions(&mut out, &af.extensions(semantics)),
            (Query::SE, _) => match af.some_extension(semantics) {
                Some(ext) => writer.write_single_extension(&mut out, &ext),
                None => ResponseWriter::<String>::write_no_extension(&writer, &mut out),
            },
        }
    }
}
