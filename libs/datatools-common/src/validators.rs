//! Checksum validation of Russian taxpayer (INN) and insurance (SNILS) numbers

use crate::error::ValidationError;

const INN_COEFFICIENTS: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

fn digits_of(text: &str) -> Option<Vec<u32>> {
    text.chars().map(|ch| ch.to_digit(10)).collect()
}

/// Weighted checksum reduced modulo 11, then 10
fn inn_check_digit(coefficients: &[u32], digits: &[u32]) -> u32 {
    let sum: u32 = coefficients
        .iter()
        .zip(digits)
        .map(|(coef, digit)| coef * digit)
        .sum();
    sum % 11 % 10
}

/// Validate an INN, optionally together with the KPP issued alongside it
///
/// Ten-digit INNs belong to organizations and carry one check digit.
/// Twelve-digit INNs belong to individual entrepreneurs, carry two check
/// digits and must not come with a KPP.
///
/// # Errors
/// Returns a `ValidationError` describing the first rule the value breaks
pub fn validate_inn(inn: &str, kpp: Option<&str>) -> Result<(), ValidationError> {
    let checksum_error = || ValidationError::InnChecksum {
        inn: inn.to_string(),
    };

    match inn.chars().count() {
        10 => {
            let digits = digits_of(inn).ok_or_else(checksum_error)?;
            if inn_check_digit(&INN_COEFFICIENTS[2..], &digits[..9]) != digits[9] {
                return Err(checksum_error());
            }
        }
        12 => {
            let digits = digits_of(inn).ok_or_else(checksum_error)?;
            if inn_check_digit(&INN_COEFFICIENTS[1..], &digits[..10]) != digits[10]
                || inn_check_digit(&INN_COEFFICIENTS, &digits[..11]) != digits[11]
            {
                return Err(checksum_error());
            }
            if let Some(kpp) = kpp.filter(|kpp| !kpp.is_empty()) {
                return Err(ValidationError::InnWithKpp {
                    inn: inn.to_string(),
                    kpp: kpp.to_string(),
                });
            }
        }
        _ => {
            return Err(ValidationError::InnLength {
                inn: inn.to_string(),
            })
        }
    }
    Ok(())
}

/// Validate a SNILS given as 11 digits without separators
///
/// The last two digits are a checksum of the first nine weighted 9 down to 1:
/// sums below 100 are used as is, 100 and 101 map to 0, larger sums are
/// taken modulo 101 (with 100 again mapping to 0).
///
/// # Errors
/// Returns a `ValidationError` for empty, non-numeric, wrong-length or
/// checksum-failing values, including the all-zero number
pub fn validate_snils(snils: &str) -> Result<(), ValidationError> {
    if snils.is_empty() {
        return Err(ValidationError::EmptySnils);
    }
    let digits = digits_of(snils).ok_or(ValidationError::SnilsNotNumeric)?;
    if digits.len() != 11 {
        return Err(ValidationError::SnilsLength);
    }
    if digits.iter().all(|digit| *digit == 0) {
        return Err(ValidationError::SnilsChecksum);
    }

    let checksum: u32 = digits[..9]
        .iter()
        .zip((1..=9u32).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let expected = match checksum {
        0..=99 => checksum,
        100 | 101 => 0,
        _ => match checksum % 101 {
            100 => 0,
            rest => rest,
        },
    };

    if expected == digits[9] * 10 + digits[10] {
        Ok(())
    } else {
        Err(ValidationError::SnilsChecksum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_organization_inn() {
        assert_eq!(validate_inn("7707083893", None), Ok(()));
        assert_eq!(validate_inn("7707083893", Some("773601001")), Ok(()));
    }

    #[test]
    fn test_valid_entrepreneur_inn() {
        assert_eq!(validate_inn("500100732259", None), Ok(()));
        assert_eq!(validate_inn("500100732259", Some("")), Ok(()));
    }

    #[test]
    fn test_inn_checksum_mismatch() {
        assert!(matches!(
            validate_inn("7707083894", None),
            Err(ValidationError::InnChecksum { .. })
        ));
        assert!(matches!(
            validate_inn("500100732258", None),
            Err(ValidationError::InnChecksum { .. })
        ));
        assert!(matches!(
            validate_inn("77070838a3", None),
            Err(ValidationError::InnChecksum { .. })
        ));
    }

    #[test]
    fn test_entrepreneur_inn_with_kpp() {
        assert_eq!(
            validate_inn("500100732259", Some("773601001")),
            Err(ValidationError::InnWithKpp {
                inn: "500100732259".to_string(),
                kpp: "773601001".to_string(),
            })
        );
    }

    #[test]
    fn test_inn_wrong_length() {
        let err = validate_inn("12345", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong inn length: 12345 (must be 10 or 12 characters)"
        );
        assert!(validate_inn("", None).is_err());
    }

    #[test]
    fn test_valid_snils() {
        assert_eq!(validate_snils("11223344595"), Ok(()));
        assert_eq!(validate_snils("12345678964"), Ok(()));
        assert_eq!(validate_snils("08765430300"), Ok(()));
    }

    #[test]
    fn test_invalid_snils() {
        assert_eq!(validate_snils(""), Err(ValidationError::EmptySnils));
        assert_eq!(validate_snils("00000000000"), Err(ValidationError::SnilsChecksum));
        assert_eq!(validate_snils("112-233-445 95"), Err(ValidationError::SnilsNotNumeric));
        assert_eq!(validate_snils("1122334459"), Err(ValidationError::SnilsLength));
        assert_eq!(validate_snils("11223344596"), Err(ValidationError::SnilsChecksum));
    }
}
