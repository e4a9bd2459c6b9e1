//! Boolean coercion and conditional helpers

use std::fmt::Display;

use crate::constants::{FALSE_TOKENS, TRUE_TOKENS};

fn token_of(value: &impl Display) -> String {
    value.to_string().to_lowercase()
}

/// `Some(true)` if the value's text is one of the true tokens
#[must_use]
pub fn try_true(value: impl Display) -> Option<bool> {
    TRUE_TOKENS
        .contains(&token_of(&value).as_str())
        .then_some(true)
}

/// `Some(false)` if the value's text is one of the false tokens
#[must_use]
pub fn try_false(value: impl Display) -> Option<bool> {
    FALSE_TOKENS
        .contains(&token_of(&value).as_str())
        .then_some(false)
}

/// Coerce a value to a boolean by its text, case-insensitively
///
/// Returns `None` when the text matches neither token set.
#[must_use]
pub fn try_bool(value: impl Display) -> Option<bool> {
    let token = token_of(&value);
    try_true(&token).or_else(|| try_false(&token))
}

/// Return `err` when `cond` holds
///
/// # Errors
/// Returns the given error if the condition is true
pub fn fail_if<E>(cond: bool, err: E) -> Result<(), E> {
    if cond {
        Err(err)
    } else {
        Ok(())
    }
}

/// Call `f` only when `cond` holds
pub fn run_if<T>(cond: bool, f: impl FnOnce() -> T) -> Option<T> {
    cond.then(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommonError;

    #[test]
    fn test_try_true() {
        assert_eq!(try_true("YES"), Some(true));
        assert_eq!(try_true(1), Some(true));
        assert_eq!(try_true(true), Some(true));
        assert_eq!(try_true("no"), None);
        assert_eq!(try_true("maybe"), None);
    }

    #[test]
    fn test_try_false() {
        assert_eq!(try_false("F"), Some(false));
        assert_eq!(try_false(0), Some(false));
        assert_eq!(try_false("yes"), None);
    }

    #[test]
    fn test_try_bool() {
        assert_eq!(try_bool("y"), Some(true));
        assert_eq!(try_bool("N"), Some(false));
        assert_eq!(try_bool(false), Some(false));
        assert_eq!(try_bool(2), None);
        assert_eq!(try_bool(""), None);
    }

    #[test]
    fn test_fail_if() {
        assert!(fail_if(false, CommonError::EmptyName).is_ok());
        assert_eq!(
            fail_if(true, CommonError::EmptyName),
            Err(CommonError::EmptyName)
        );
    }

    #[test]
    fn test_run_if() {
        let mut calls = 0;
        assert_eq!(run_if(false, || calls += 1), None);
        assert_eq!(calls, 0);
        assert_eq!(run_if(true, || 41 + 1), Some(42));
    }
}
