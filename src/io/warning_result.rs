/// An enum acting like a `Result`, but producing warnings instead of errors.
///
/// As there are no error values, there is always an "ok" value, which can be associated with one or more warnings.
pub(crate) enum WarningResult<T, W> {
    Ok(T),
    Warned(T, Vec<W>),
}

impl<T, W> WarningResult<T, W> {
    /// Builds a value associated with a single warning.
    pub fn warned(t: T, w: W) -> Self {
        WarningResult::Warned(t, vec![w])
    }

    /// Consumes the warnings, returning the underlying value.
    ///
    /// The warnings are passed to the provided callback, which is not called if there is no warning.
    pub fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<W>),
    {
        match self {
            WarningResult::Ok(t) => t,
            WarningResult::Warned(t, w) => {
                f(w);
                t
            }
        }
    }

    /// Maps the underlying value, keeping the warnings.
    pub fn map<U, F>(self, f: F) -> WarningResult<U, W>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            WarningResult::Ok(t) => WarningResult::Ok(f(t)),
            WarningResult::Warned(t, w) => WarningResult::Warned(f(t), w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_warnings_ok() {
        let mut consumed = false;
        assert_eq!(
            1,
            WarningResult::Ok(1).consume_warnings(|_v: Vec<String>| consumed = true)
        );
        assert!(!consumed);
    }

    #[test]
    fn test_consume_warnings_warned() {
        let mut consumed = vec![];
        assert_eq!(
            1,
            WarningResult::warned(1, "w".to_string()).consume_warnings(|w| consumed = w)
        );
        assert_eq!(vec!["w".to_string()], consumed);
    }

    #[test]
    fn test_map_keeps_warnings() {
        let mut consumed = vec![];
        let r = WarningResult::warned(1, "w".to_string()).map(|i| i + 1);
        assert_eq!(2, r.consume_warnings(|w| consumed = w));
        assert_eq!(vec!["w".to_string()], consumed);
        let r: WarningResult<i32, String> = WarningResult::Ok(1).map(|i| i * 3);
        assert_eq!(3, r.consume_warnings(|_| panic!()));
    }
}
