//! Unwrap helpers with good error messages.
//!
//! These replace `unwrap()` and `expect()` in test code. `#[track_caller]`
//! points the panic at the test line, not at this module.

use std::fmt::Debug;
use std::str::FromStr;

/// Unwrap a `Result`, panicking with the error value.
///
/// ```rust
/// use setupforge_test_helpers::must;
///
/// let result: Result<i32, &str> = Ok(42);
/// assert_eq!(must(result), 42);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` if `None`.
///
/// ```rust
/// use setupforge_test_helpers::must_some;
///
/// assert_eq!(must_some(Some(950.0), "front spring"), 950.0);
/// ```
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Parse a string, panicking on failure.
///
/// ```rust
/// use setupforge_test_helpers::must_parse;
///
/// let value: f64 = must_parse("23.5");
/// assert_eq!(value, 23.5);
/// ```
///
/// # Panics
///
/// Panics if parsing fails.
#[track_caller]
pub fn must_parse<T: FromStr>(s: &str) -> T
where
    T::Err: Debug,
{
    s.parse()
        .unwrap_or_else(|e| panic!("must_parse: failed to parse {s:?}: {e:?}"))
}

/// Unwrap a `Result` with a context message.
///
/// # Panics
///
/// Panics if the result is `Err`, with the context and error value.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_ok() {
        let r: Result<u8, String> = Ok(3);
        assert_eq!(must(r), 3);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err_panics() {
        let r: Result<u8, &str> = Err("boom");
        must(r);
    }

    #[test]
    #[should_panic(expected = "must_some: rear wing")]
    fn test_must_some_none_panics() {
        let none: Option<f64> = None;
        must_some(none, "rear wing");
    }

    #[test]
    fn test_must_parse() {
        let n: u32 = must_parse("1050");
        assert_eq!(n, 1050);
    }

    #[test]
    #[should_panic(expected = "loading template")]
    fn test_must_with_context() {
        let r: Result<(), &str> = Err("missing");
        must_with(r, "loading template");
    }
}
