// crusti_app_helper
// Copyright (C) 2020  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::{
    app_helper::{init_logger, init_logger_with_level},
    command::Command,
    writable_string::WritableString,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

/// A structure used to handle the set of commands and to process the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

pub(crate) const APP_HELPER_LOGGING_LEVEL_ARG: &str = "APP_HELPER_LOGGING_LEVEL_ARG";

pub(crate) fn logging_level_cli_arg() -> Arg<'static, 'static> {
    logging_level_cli_arg_with_default_value("info")
}

pub(crate) fn logging_level_cli_arg_with_default_value(
    default_value: &'static str,
) -> Arg<'static, 'static> {
    Arg::with_name(APP_HELPER_LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value(default_value)
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<T> = args.into_iter().collect();
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        let matches_result = app
            .clone()
            .get_matches_from_safe(&mut args.clone().into_iter());
        match matches_result {
            Ok(matches) => {
                let (name, sub_matches) = matches.subcommand();
                let command = self.commands.iter().find(|c| c.name() == name);
                match (command, sub_matches) {
                    (Some(c), Some(sub_matches)) => {
                        let log_level = sub_matches
                            .value_of(APP_HELPER_LOGGING_LEVEL_ARG)
                            .and_then(|l| log::LevelFilter::from_str(l).ok())
                            .unwrap_or(log::LevelFilter::Info);
                        init_logger_with_level(log_level);
                        info!("{} {}", self.app_name, self.version);
                        sys_info();
                        c.execute(sub_matches)
                    }
                    _ => Err(anyhow!("no such command: {}", name)),
                }
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, args.as_slice())
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                let first_line = e.message.lines().next().unwrap_or_default();
                Err(anyhow!("{}", first_line.trim_start_matches("error: ")))
            }
        }
    }

    fn print_help<T>(&self, app: &mut App, args: &[T]) -> Result<()>
    where
        T: Into<OsString> + Clone,
    {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let arg_string = |i: usize| {
            args.get(i)
                .and_then(|a| Into::<OsString>::into(a.clone()).into_string().ok())
        };
        let subcommand_name = match (arg_string(1), arg_string(2)) {
            (Some(a1), _) if !HELP_STRINGS.contains(&a1.as_str()) => Some(a1),
            (Some(_), Some(a2)) => Some(a2),
            _ => None,
        };
        let mut message = WritableString::default();
        match subcommand_name.and_then(|n| self.commands.iter().find(|c| c.name() == n)) {
            Some(c) => c.clap_subcommand().write_long_help(&mut message)?,
            None => app.write_long_help(&mut message)?,
        }
        println!("{}", message);
        Ok(())
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let mut sys = System::new();
    sys.refresh_cpu();
    sys.refresh_memory();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds: Vec<&str> = sys.cpus().iter().map(|p| p.brand()).collect();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count()
            .map(|n| n.to_string())
            .unwrap_or_else(unknown),
        cpu_kinds
    );
    info!("total memory: {} KB", sys.total_memory() / 1024);
    info!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, SubCommand};
    use std::{cell::RefCell, rc::Rc};

    struct LocalCommand {
        command_involved: Rc<RefCell<bool>>,
        argument_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for LocalCommand {
        fn name(&self) -> &str {
            "local_command_name"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("local_command_name")
                .about("local_command_about")
                .arg(Arg::with_name("arg_name").short("a"))
                .arg(logging_level_cli_arg_with_default_value("off"))
                .setting(AppSettings::DisableVersion)
        }

        fn execute(&self, arg_matches: &clap::ArgMatches<'_>) -> Result<()> {
            (*self.command_involved.borrow_mut()) = true;
            if arg_matches.is_present("arg_name") {
                (*self.argument_set.borrow_mut()) = true;
            }
            Ok(())
        }
    }

    fn test_local_command_result(
        args: Vec<&'static str>,
    ) -> Result<(Rc<RefCell<bool>>, Rc<RefCell<bool>>)> {
        let mut manager = CliManager::new("app_name", "app_version", "author", "about");
        let command_involved = Rc::new(RefCell::new(false));
        let argument_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(LocalCommand {
            command_involved: Rc::clone(&command_involved),
            argument_set: Rc::clone(&argument_set),
        }));
        manager
            .parse_cli(args)
            .map(|()| (command_involved, argument_set))
    }

    #[test]
    fn test_command_involved() {
        let command = test_local_command_result(vec!["app_name", "local_command_name"]).unwrap();
        assert!(*command.0.borrow());
        assert!(!*command.1.borrow());
    }

    #[test]
    fn test_command_and_arg_involved() {
        let command =
            test_local_command_result(vec!["app_name", "local_command_name", "-a"]).unwrap();
        assert!(*command.0.borrow());
        assert!(*command.1.borrow());
    }

    #[test]
    fn test_no_subcommand() {
        assert!(test_local_command_result(vec!["app_name"]).is_err());
    }

    #[test]
    fn test_wrong_subcommand() {
        assert!(test_local_command_result(vec!["app_name", "foo"]).is_err());
    }

    #[test]
    fn test_wrong_arg() {
        assert!(test_local_command_result(vec!["app_name", "local_command_name", "-b"]).is_err());
    }

    #[test]
    fn test_wrong_logging_level() {
        assert!(test_local_command_result(vec![
            "app_name",
            "local_command_name",
            "--logging-level",
            "verbose"
        ])
        .is_err());
    }

    #[test]
    fn test_help() {
        test_local_command_result(vec!["app_name", "-h"]).unwrap();
    }

    #[test]
    fn test_help_subcommand() {
        test_local_command_result(vec!["app_name", "help"]).unwrap();
    }

    #[test]
    fn test_help_for_subcommand() {
        test_local_command_result(vec!["app_name", "help", "local_command_name"]).unwrap();
    }

    #[test]
    fn test_subcommand_help() {
        test_local_command_result(vec!["app_name", "local_command_name", "-h"]).unwrap();
    }
}
