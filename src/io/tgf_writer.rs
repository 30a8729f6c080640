use crate::{aa::AAFramework, utils::LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Trivial Graph Format (TGF).
///
/// Arguments are written in the framework order, followed by the `#` sentinel and the attacks.
/// Attacks are grouped by attacked argument, keeping the order of the attacker lists.
///
/// # Example
///
/// The following example retrieves an AF and writes it to the standard output using TGF.
///
/// ```
/// # use carneades::aa::{AAFramework, ArgumentSet};
/// # use carneades::io::TgfWriter;
/// # use carneades::utils::LabelType;
/// # use anyhow::Result;
/// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
///     let writer = TgfWriter::default();
///     writer.write_framework(&af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"])));
/// ```
#[derive(Default)]
pub struct TgfWriter;

impl TgfWriter {
    /// Writes a framework using TGF to the provided writer.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a framework";
        for arg in framework.argument_set().iter() {
            writeln!(writer, "{}", arg).context(context)?;
        }
        writeln!(writer, "#").context(context)?;
        for attack in framework.iter_attacks() {
            writeln!(writer, "{} {}", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}
