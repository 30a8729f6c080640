mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod cli_manager;

mod command;

pub(crate) mod common;

mod dung_command;
pub(crate) use dung_command::DungCommand;

mod eval_command;
pub(crate) use eval_command::EvalCommand;

mod iccma_command;
pub(crate) use iccma_command::IccmaCommand;

mod problems_command;
pub(crate) use problems_command::ProblemsCommand;

mod writable_string;
