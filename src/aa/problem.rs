use anyhow::{anyhow, Context, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The grounded semantics
    GR,
    /// The complete semantics
    CO,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "gr" | "grounded" => Ok(Semantics::GR),
            "co" | "complete" => Ok(Semantics::CO),
            "pr" | "preferred" => Ok(Semantics::PR),
            "st" | "stable" => Ok(Semantics::ST),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Query {
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
    /// Enumerate all the extensions
    EE,
    /// Compute a single extension
    SE,
}

impl Query {
    /// Iterates over the problem strings of every (query, semantics) couple.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::aa::Query;
    /// let problems = Query::iter_problem_strings().collect::<Vec<String>>();
    /// assert_eq!(16, problems.len());
    /// assert!(problems.contains(&"DC-GR".to_string()));
    /// ```
    pub fn iter_problem_strings() -> impl Iterator<Item = String> {
        Query::iter().flat_map(|q| {
            Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref()))
        })
    }

    /// Returns `true` iff the query requires an argument.
    pub fn requires_argument(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "dc" => Ok(Query::DC),
            "ds" => Ok(Query::DS),
            "ee" => Ok(Query::EE),
            "se" => Ok(Query::SE),
            _ => Err(anyhow!(r#"undefined query "{}""#, value)),
        }
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// This functions reads a problem string following the format in ICCMA competitions.
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_problem_ok() {
        assert_eq!(
            (Query::SE, Semantics::ST),
            read_problem_string("SE-ST").unwrap()
        );
        assert_eq!(
            (Query::EE, Semantics::PR),
            read_problem_string("ee-pr").unwrap()
        );
    }

    #[test]
    fn test_read_problem_unknown_query() {
        assert!(read_problem_string("foo-ST").is_err());
    }

    #[test]
    fn test_read_problem_unknown_semantics() {
        assert!(read_problem_string("SE-ID").is_err());
    }

    #[test]
    fn test_read_problem_no_hyphen() {
        assert!(read_problem_string("SEST").is_err());
    }

    #[test]
    fn test_semantics_long_names() {
        assert_eq!(Semantics::PR, Semantics::try_from("preferred").unwrap());
        assert_eq!(Semantics::GR, Semantics::try_from("Grounded").unwrap());
    }

    #[test]
    fn test_problem_strings() {
        let problems = Query::iter_problem_strings().collect::<Vec<String>>();
        assert_eq!("DC-GR", problems[0]);
        assert_eq!("SE-ST", problems[15]);
    }
}
