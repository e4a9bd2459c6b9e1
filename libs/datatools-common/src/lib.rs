//! Datatools Common - Small helpers shared by reporting code
//!
//! Boolean coercion, order-preserving collection utilities, number
//! extraction and formatting, composite keys, text cropping, name parsing and
//! INN/SNILS validation.
//!
//! # Examples
//!
//! ```
//! use datatools_common::{formatted_tooltip, parse_full_name, try_bool, NumberInput};
//!
//! assert_eq!(try_bool("Yes"), Some(true));
//! assert_eq!(formatted_tooltip(&NumberInput::Int(1_300)).unwrap(), "1.3K");
//!
//! let person = parse_full_name("ivanov ivan ivanovich").unwrap();
//! assert_eq!(person.surname, "Ivanov");
//! ```

pub mod bools;
pub mod ckey;
pub mod collections;
pub mod constants;
pub mod error;
pub mod numbers;
pub mod text;
pub mod validators;

pub use bools::{fail_if, run_if, try_bool, try_false, try_true};
pub use ckey::{CompositeKey, KeyType, KeyValue};
pub use collections::{
    coalesce, common_uniques, diff_list, distinct, extract_subelements, is_subset,
    split_sequence, Nested,
};
pub use constants::*;
pub use error::{CommonError, Result, ValidationError};
pub use numbers::{
    digitize_string, formatted_tooltip, parse_int, try_float, try_int, NumberInput,
    UniqueIdGenerator,
};
pub use text::{crop_text_line_by_line, parse_full_name, FullName};
pub use validators::{validate_inn, validate_snils};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_exported_constants() {
        assert_eq!(TRUE_TOKENS.len(), 5);
        assert_eq!(FALSE_TOKENS[0], "false");
        assert_eq!(KEY_DELIMITER, '.');
        assert_eq!(CROP_ELLIPSIS, "&#133;");
        assert_eq!(DEFAULT_ID_BITS, 32);
    }

    #[test]
    fn test_re_exported_functions() {
        assert_eq!(try_false("n"), Some(false));
        assert_eq!(distinct(&["a", "b", "a"]), vec!["a", "b"]);
        assert_eq!(parse_int(&NumberInput::from("x12")).unwrap(), 12);
        assert_eq!(digitize_string(Some("+7 (900)")), "7900");
        assert!(validate_inn("7707083893", None).is_ok());
        assert!(validate_snils("11223344595").is_ok());
        assert_eq!(crop_text_line_by_line("short", 2, 32), "short");
    }
}
