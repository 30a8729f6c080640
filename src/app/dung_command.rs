use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use carneades::{
    aa::Semantics,
    io::{IccmaWriter, InstanceReader, ResponseWriter, TgfReader},
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "dung";

const ARG_FORMAT: &str = "FORMAT";
const ARG_SEMANTICS: &str = "SEMANTICS";
const ARG_ARG: &str = "ARG";
const ARG_SKEPTICAL: &str = "SKEPTICAL";

pub(crate) struct DungCommand;

impl DungCommand {
    pub(crate) fn new() -> Self {
        DungCommand
    }
}

impl<'a> Command<'a> for DungCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the extensions of an abstract argumentation framework")
            .setting(AppSettings::DisableVersion)
            .arg(common::positional_input_arg())
            .arg(
                Arg::with_name(ARG_FORMAT)
                    .short("f")
                    .long("from")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&common::AF_FORMATS)
                    .default_value("tgf")
                    .help("the input file format")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_SEMANTICS)
                    .short("s")
                    .long("semantics")
                    .empty_values(false)
                    .multiple(false)
                    .default_value("grounded")
                    .help("the semantics (grounded, complete, preferred, stable or GR, CO, PR, ST)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .long("arg")
                    .empty_values(false)
                    .multiple(false)
                    .help("an argument whose acceptance must be checked instead of listing the extensions")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_SKEPTICAL)
                    .long("skeptical")
                    .requires(ARG_ARG)
                    .help("check skeptical acceptance instead of credulous acceptance")
                    .required(false),
            )
            .arg(common::output_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let semantics = Semantics::try_from(arg_matches.value_of(ARG_SEMANTICS).unwrap())
            .context("while parsing the semantics passed to the command line")?;
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = TgfReader::default();
        let af = common::read_af_file_path(file, &mut reader)?;
        let writer = IccmaWriter::default();
        let mut out = common::open_output(arg_matches)?;
        match arg_matches.value_of(ARG_ARG) {
            Some(a) => {
                let arg = reader
                    .read_arg_from_str(&af, a)
                    .context("while parsing the argument passed to the command line")?;
                let status = if arg_matches.is_present(ARG_SKEPTICAL) {
                    af.skeptically_inferred(semantics, arg.label())
                } else {
                    af.credulously_inferred(semantics, arg.label())
                };
                ResponseWriter::<String>::write_acceptance_status(&writer, &mut out, status)
            }
            None => {
                let extensions = af.extensions(semantics);
                info!(
                    "found {} {} extension(s)",
                    extensions.len(),
                    semantics.as_ref()
                );
                extensions
                    .iter()
                    .try_for_each(|ext| writer.write_single_extension(&mut out, ext))
            }
        }
    }
}
