//! Number extraction and formatting helpers

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ID_BITS;
use crate::error::{CommonError, Result};

/// Loosely typed numeric input accepted by [`parse_int`] and [`formatted_tooltip`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NumberInput {
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl NumberInput {
    fn is_empty(&self) -> bool {
        match self {
            Self::Int(value) => *value == 0,
            Self::Float(value) => *value == 0.0,
            Self::Text(text) => text.is_empty(),
            Self::Bytes(bytes) => bytes.is_empty(),
        }
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for NumberInput {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

fn join_digits(input: &str, joined: &str) -> Result<i64> {
    joined
        .parse::<i64>()
        .map_err(|e| CommonError::parse(input, e.to_string()))
}

/// Pull an integer out of loosely typed input
///
/// Text keeps every run of digits (with any leading minus signs) and glues
/// them together, so `"1234,Enterprise Structure"` becomes `1234`. Bytes are
/// read as the concatenated decimal values of each byte. Zero, an empty
/// string and empty bytes yield `0`; floats are truncated.
///
/// # Errors
/// Returns `CommonError::NoNumber` if text holds no digits, or
/// `CommonError::Parse` if the glued digits do not form an `i64` or a float
/// is NaN or infinite
pub fn parse_int(input: &NumberInput) -> Result<i64> {
    if input.is_empty() {
        return Ok(0);
    }

    match input {
        NumberInput::Int(value) => Ok(*value),
        NumberInput::Float(value) if !value.is_finite() => Err(CommonError::parse(
            value.to_string(),
            "cannot convert a non-finite float to an integer",
        )),
        NumberInput::Float(value) => Ok(value.trunc() as i64),
        NumberInput::Bytes(bytes) => {
            let joined: String = bytes.iter().map(u8::to_string).collect();
            join_digits(&joined, &joined)
        }
        NumberInput::Text(text) => {
            let digit_runs = Regex::new(r"-*[0-9]+")
                .map_err(|e| CommonError::parse(text.as_str(), e.to_string()))?;
            let joined: String = digit_runs.find_iter(text).map(|m| m.as_str()).collect();
            if joined.is_empty() {
                return Err(CommonError::NoNumber {
                    input: text.clone(),
                });
            }
            join_digits(text, &joined)
        }
    }
}

/// Parse an integer, ignoring surrounding whitespace
#[must_use]
pub fn try_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parse a float, ignoring surrounding whitespace
#[must_use]
pub fn try_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Compact counter label such as `1.3K` or `2M`
///
/// Values above 999 499 are shown in millions with one decimal, above 99 999
/// in whole thousands, from 1 000 in thousands with one decimal. Zero and
/// negative values become `"0"`. A trailing `.0` is dropped.
///
/// # Errors
/// Returns `CommonError::InvalidArgument` for byte input and
/// `CommonError::Parse` for text that is not a number
pub fn formatted_tooltip(input: &NumberInput) -> Result<String> {
    let number = match input {
        NumberInput::Int(value) => Number::Int(*value),
        NumberInput::Float(value) => Number::Float(*value),
        NumberInput::Text(text) => match (try_int(text), try_float(text)) {
            (Some(value), _) => Number::Int(value),
            (None, Some(value)) => Number::Float(value),
            (None, None) => {
                return Err(CommonError::parse(
                    text.as_str(),
                    "Incorrect text contains numbers",
                ))
            }
        },
        NumberInput::Bytes(_) => {
            return Err(CommonError::invalid_argument(
                "tooltip expects a number or numeric text",
            ))
        }
    };

    let value = number.as_f64();
    let label = if value > 999_499.0 {
        format!("{:.1}M", value / 1_000_000.0).replace(".0", "")
    } else if value > 99_999.0 {
        format!("{:.0}K", value / 1_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0).replace(".0", "")
    } else if value <= 0.0 {
        "0".to_string()
    } else {
        match number {
            Number::Int(value) => value.to_string(),
            Number::Float(value) => value.to_string(),
        }
    };
    Ok(label)
}

/// Keep only ASCII digits, plus a leading minus sign if the text starts with one
#[must_use]
pub fn digitize_string(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let prefix = if text.starts_with('-') { "-" } else { "" };
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    format!("{prefix}{digits}")
}

/// Incrementing id source starting from a (usually random) seed
///
/// ```
/// use datatools_common::UniqueIdGenerator;
///
/// let mut ids = UniqueIdGenerator::with_seed(41);
/// assert_eq!(ids.next(), Some(41));
/// assert_eq!(ids.next(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueIdGenerator {
    next: Option<u64>,
}

impl UniqueIdGenerator {
    /// Start from a random 32-bit seed
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(random_bits(DEFAULT_ID_BITS))
    }

    /// Start from a random seed of the given width
    ///
    /// # Errors
    /// Returns `CommonError::InvalidArgument` unless `bits` is in `1..=64`
    pub fn from_random_bits(bits: u32) -> Result<Self> {
        if !(1..=64).contains(&bits) {
            return Err(CommonError::invalid_argument(format!(
                "seed width must be between 1 and 64 bits, got {bits}"
            )));
        }
        Ok(Self::with_seed(random_bits(bits)))
    }

    /// Start from a fixed seed
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { next: Some(seed) }
    }
}

impl Default for UniqueIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for UniqueIdGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }
}

fn random_bits(bits: u32) -> u64 {
    let mask = if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    };
    rand::thread_rng().gen::<u64>() & mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_text() {
        assert_eq!(parse_int(&"1234,Enterprise Structure".into()).unwrap(), 1234);
        assert_eq!(parse_int(&"id: -42".into()).unwrap(), -42);
        assert_eq!(parse_int(&"a1b2c3".into()).unwrap(), 123);
    }

    #[test]
    fn test_parse_int_other_inputs() {
        assert_eq!(parse_int(&NumberInput::Int(7)).unwrap(), 7);
        assert_eq!(parse_int(&NumberInput::Float(-3.9)).unwrap(), -3);
        assert_eq!(parse_int(&NumberInput::Bytes(vec![1, 20])).unwrap(), 120);
    }

    #[test]
    fn test_parse_int_falsy_is_zero() {
        assert_eq!(parse_int(&"".into()).unwrap(), 0);
        assert_eq!(parse_int(&NumberInput::Float(0.0)).unwrap(), 0);
        assert_eq!(parse_int(&NumberInput::Bytes(Vec::new())).unwrap(), 0);
    }

    #[test]
    fn test_parse_int_rejects_non_finite_floats() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    parse_int(&NumberInput::Float(value)),
                    Err(CommonError::Parse { .. })
                ),
                "{value}"
            );
        }
    }

    #[test]
    fn test_parse_int_errors() {
        assert!(matches!(
            parse_int(&"no digits".into()),
            Err(CommonError::NoNumber { .. })
        ));
        assert!(matches!(
            parse_int(&"12-3".into()),
            Err(CommonError::Parse { .. })
        ));
    }

    #[test]
    fn test_try_int_and_float() {
        assert_eq!(try_int(" 15 "), Some(15));
        assert_eq!(try_int("1.5"), None);
        assert_eq!(try_float("1.5"), Some(1.5));
        assert_eq!(try_float("abc"), None);
    }

    #[test]
    fn test_formatted_tooltip() {
        let label = |input: NumberInput| formatted_tooltip(&input).unwrap();

        assert_eq!(label(1_300i64.into()), "1.3K");
        assert_eq!(label(1_000i64.into()), "1K");
        assert_eq!(label(99_999i64.into()), "100K");
        assert_eq!(label(150_000i64.into()), "150K");
        assert_eq!(label(2_000_000i64.into()), "2M");
        assert_eq!(label(2_450_000i64.into()), "2.5M");
        assert_eq!(label(999i64.into()), "999");
        assert_eq!(label(12.0f64.into()), "12");
        assert_eq!(label(0i64.into()), "0");
        assert_eq!(label((-5i64).into()), "0");
        assert_eq!(label("2500".into()), "2.5K");
        assert_eq!(label("7.5".into()), "7.5");
    }

    #[test]
    fn test_formatted_tooltip_errors() {
        assert!(matches!(
            formatted_tooltip(&NumberInput::Bytes(vec![1])),
            Err(CommonError::InvalidArgument { .. })
        ));
        assert!(matches!(
            formatted_tooltip(&"lots".into()),
            Err(CommonError::Parse { .. })
        ));
    }

    #[test]
    fn test_digitize_string() {
        assert_eq!(digitize_string(None), "");
        assert_eq!(digitize_string(Some("")), "");
        assert_eq!(digitize_string(Some("-12; DROP 3")), "-123");
        assert_eq!(digitize_string(Some("a-1")), "1");
    }

    #[test]
    fn test_unique_id_generator() {
        let ids: Vec<u64> = UniqueIdGenerator::with_seed(10).take(3).collect();
        assert_eq!(ids, vec![10, 11, 12]);

        let mut last = UniqueIdGenerator::with_seed(u64::MAX);
        assert_eq!(last.next(), Some(u64::MAX));
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_random_seed_width() {
        for _ in 0..32 {
            let seed = UniqueIdGenerator::from_random_bits(8).unwrap().next().unwrap();
            assert!(seed < 256);
        }
        assert!(UniqueIdGenerator::new().next().unwrap() <= u64::from(u32::MAX));
        assert!(UniqueIdGenerator::from_random_bits(0).is_err());
        assert!(UniqueIdGenerator::from_random_bits(65).is_err());
    }
}
