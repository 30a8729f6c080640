use super::ResponseWriter;
use crate::{aa::ArgSet, utils::LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the output format used in the ICCMA competitions (up to 2021).
///
/// More precisely, the answers to argumentation problems are written this way:
///   * extension: the set literal `[a,b,c]`
///   * sequence of extensions: the list of set literals `[[a],[b,c]]`
///   * absence of extension: `NO`
///   * acceptance status: `YES` and `NO`
///
/// # Example
///
/// ```
/// # use carneades::aa::ArgSet;
/// # use carneades::io::{IccmaWriter, ResponseWriter};
/// let mut buffer = Vec::new();
/// IccmaWriter::default()
///     .write_single_extension(&mut buffer, &ArgSet::from_labels(&["a", "b"]))
///     .unwrap();
/// assert_eq!("[a,b]\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct IccmaWriter;

impl<T> ResponseWriter<T> for IccmaWriter
where
    T: LabelType,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(&self, writer: &mut dyn Write, extension: &ArgSet<T>) -> Result<()> {
        let context = "while writing an extension";
        writeln!(writer, "{}", extension).context(context)?;
        writer.flush().context(context)
    }

    fn write_extensions(&self, writer: &mut dyn Write, extensions: &[ArgSet<T>]) -> Result<()> {
        let context = "while writing extensions";
        write!(writer, "[").context(context)?;
        let mut first = true;
        extensions.iter().try_for_each(|ext| {
            if first {
                first = false;
                write!(writer, "{}", ext).context(context)
            } else {
                write!(writer, ",{}", ext).context(context)
            }
        })?;
        writeln!(writer, "]").context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }
}
