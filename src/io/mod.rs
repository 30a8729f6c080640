//! Objects used to read and write argumentation frameworks, argument graphs and answers to problems.

mod dot_writer;
pub use dot_writer::DotWriter;

mod iccma_writer;
pub use iccma_writer::IccmaWriter;

mod json;
pub use json::JsonReader;
pub use json::JsonWriter;

mod specs;
pub use specs::GraphReader;
pub use specs::GraphWriter;
pub use specs::InstanceReader;
pub use specs::ResponseWriter;
pub use specs::WarningHandler;

mod tgf_reader;
pub use tgf_reader::TgfReader;

mod tgf_writer;
pub use tgf_writer::TgfWriter;

mod warning_result;

mod yaml;
pub use yaml::YamlReader;
pub use yaml::YamlWriter;
