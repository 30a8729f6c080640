use super::{warning_result::WarningResult, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, ArgumentSet};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

lazy_static! {
    static ref SENTINEL_LINE_PATTERN: Regex = Regex::new(r"^\s*#\s*$").unwrap();
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*(\S+)\s*(.*)$").unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*(\S+)\s+(\S+)\s*(.*)$").unwrap();
}

fn read_arg_line(l: &str) -> WarningResult<String, String> {
    let c = ARG_LINE_PATTERN.captures(l).unwrap();
    let arg = c.get(1).unwrap().as_str().to_string();
    if c.get(2).unwrap().as_str().is_empty() {
        WarningResult::Ok(arg)
    } else {
        let w = format!("ignoring the label of argument {}", arg);
        WarningResult::warned(arg, w)
    }
}

fn read_att_line(l: &str) -> WarningResult<Option<(String, String)>, String> {
    match ATT_LINE_PATTERN.captures(l) {
        Some(c) => {
            let from = c.get(1).unwrap().as_str().to_string();
            let to = c.get(2).unwrap().as_str().to_string();
            if c.get(3).unwrap().as_str().is_empty() {
                WarningResult::Ok(Some((from, to)))
            } else {
                let w = format!("ignoring the label of the attack from {} to {}", from, to);
                WarningResult::warned(Some((from, to)), w)
            }
        }
        None => WarningResult::warned(
            None,
            format!("ignoring malformed attack line \"{}\"", l.trim()),
        ),
    }
}

/// A reader for the Trivial Graph Format (TGF).
///
/// This object is used to read an [`AAFramework`] encoded using TGF.
/// The [LabelType](crate::utils::LabelType) of the returned argument frameworks is [String].
///
/// # TGF format
///
/// Each line before the `#` sentinel declares an argument, given by its first token.
/// Each line after the sentinel declares an attack `src dst`, meaning that `src` attacks `dst`.
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// a
/// b
/// c
/// #
/// a b
/// b a
/// c b
/// ```
///
/// Blank lines are skipped.
/// Trailing tokens (node and edge labels) and attack lines made of a single token are ignored after a warning is raised.
/// Attacks involving undeclared arguments lead to an error.
///
/// # Example
///
/// ```
/// # use carneades::aa::AAFramework;
/// # use carneades::io::{InstanceReader, TgfReader};
/// let reader = TgfReader::default();
/// let af = reader.read(&mut "a\nb\n#\na b\n".as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
/// ```
#[derive(Default)]
pub struct TgfReader {
    warning_handlers: Vec<WarningHandler>,
}

impl InstanceReader<String> for TgfReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::default());
        let mut in_attacks = false;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let warning_consumer = |warnings: Vec<String>| {
                for w in warnings.iter() {
                    self.warning_handlers
                        .iter()
                        .for_each(|h| (h)(1 + i, w.to_string()));
                }
            };
            let l = &line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if SENTINEL_LINE_PATTERN.is_match(l) {
                if in_attacks {
                    warning_consumer(vec!["ignoring extra # sentinel".to_string()]);
                }
                in_attacks = true;
                continue;
            }
            if in_attacks {
                if let Some((from, to)) = read_att_line(l).consume_warnings(warning_consumer) {
                    af.new_attack(&from, &to).with_context(context)?;
                }
            } else {
                let arg = read_arg_line(l).consume_warnings(warning_consumer);
                if af.argument_set().has_argument(&arg) {
                    warning_consumer(vec![format!("argument {} is declared twice", arg)]);
                }
                af.new_argument(arg);
            }
        }
        Ok(af)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&arg.to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn read_with_warnings(instance: &str) -> (Result<AAFramework<String>>, Vec<(usize, String)>) {
        let warnings = Rc::new(RefCell::new(vec![]));
        let mut reader = TgfReader::default();
        let warnings_clone = Rc::clone(&warnings);
        reader.add_warning_handler(Box::new(move |line, w| {
            warnings_clone.borrow_mut().push((line, w))
        }));
        let result = reader.read(&mut instance.as_bytes());
        let w = warnings.borrow().clone();
        (result, w)
    }

    #[test]
    fn test_read_ok() {
        let (af, warnings) = read_with_warnings("a\nb\nc\n#\na b\nb a\nc b\n");
        let af = af.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(3, af.n_arguments());
        assert_eq!(3, af.n_attacks());
        assert_eq!(
            vec![&"a".to_string(), &"c".to_string()],
            af.attackers_of(&"b".to_string()).unwrap()
        );
    }

    #[test]
    fn test_read_no_sentinel() {
        let (af, _) = read_with_warnings("a\nb\n");
        let af = af.unwrap();
        assert_eq!(2, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_read_empty() {
        let (af, warnings) = read_with_warnings("");
        assert_eq!(0, af.unwrap().n_arguments());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_read_blank_lines_and_spaces() {
        let (af, warnings) = read_with_warnings("\n  a  \n\nb\n # \n\n  a   b  \n");
        let af = af.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(2, af.n_arguments());
        assert_eq!(1, af.n_attacks());
    }

    #[test]
    fn test_read_labels_warn() {
        let (af, warnings) = read_with_warnings("a argument a\nb\n#\na b attacks\n");
        let af = af.unwrap();
        assert_eq!(2, af.n_arguments());
        assert_eq!(1, af.n_attacks());
        assert_eq!(2, warnings.len());
        assert_eq!(1, warnings[0].0);
        assert_eq!(4, warnings[1].0);
    }

    #[test]
    fn test_read_malformed_attack_is_skipped() {
        let (af, warnings) = read_with_warnings("a\nb\n#\na\na b\n");
        assert_eq!(1, af.unwrap().n_attacks());
        assert_eq!(
            vec![(4, "ignoring malformed attack line \"a\"".to_string())],
            warnings
        );
    }

    #[test]
    fn test_read_duplicate_argument() {
        let (af, warnings) = read_with_warnings("a\na\n");
        assert_eq!(1, af.unwrap().n_arguments());
        assert_eq!(1, warnings.len());
    }

    #[test]
    fn test_read_unknown_argument() {
        let (af, _) = read_with_warnings("a\n#\na b\n");
        let message = format!("{:#}", af.unwrap_err());
        assert!(message.contains("while reading line with index 2"));
        assert!(message.contains("no such argument: b"));
    }

    #[test]
    fn test_read_extra_sentinel_is_skipped() {
        let (af, warnings) = read_with_warnings("a\nb\n#\na b\n#\nb a\n");
        let af = af.unwrap();
        assert_eq!(2, af.n_attacks());
        assert_eq!(vec![(5, "ignoring extra # sentinel".to_string())], warnings);
    }

    #[test]
    fn test_read_arg_from_str() {
        let reader = TgfReader::default();
        let af = reader.read(&mut "a\nb\n".as_bytes()).unwrap();
        assert_eq!(1, reader.read_arg_from_str(&af, "b").unwrap().id());
        assert!(reader.read_arg_from_str(&af, "c").is_err());
    }
}
