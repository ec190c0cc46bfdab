//! Masked serial number handling.
//!
//! A serial number is an optional non-numeric prefix followed by a run
//! of digits.  Incrementing only touches the digit run and keeps its
//! zero-padded width; the prefix is passed through untouched.

use crate::error::{Result, SerialError};

/// Strips every character that is not an ASCII digit.
pub fn only_numbers(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Splits `value` into its prefix and its trailing maximal digit run.
/// Returns `None` when the value does not end in a digit.
fn split_mask(value: &str) -> Option<(&str, &str)> {
    let prefix = value.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &value[prefix.len()..];
    if digits.is_empty() {
        None
    } else {
        Some((prefix, digits))
    }
}

/// Increments the trailing digit run of `value` by `delta`.
///
/// The result is left-padded with zeros to the original run width.  If
/// the new number needs more digits than the original run it grows
/// rather than being truncated (`"A007"` + 993 is `"A1000"`).  An empty
/// value yields an empty string.
pub fn increment_masked_number(value: &str, delta: u64) -> Result<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let (prefix, digits) = split_mask(value).ok_or_else(|| SerialError::InvalidSerialNumber {
        value: value.to_string(),
    })?;

    let overflow = || SerialError::SerialNumberOverflow {
        value: value.to_string(),
        delta,
    };
    let current: u128 = digits.parse().map_err(|_| overflow())?;
    let next = current.checked_add(u128::from(delta)).ok_or_else(overflow)?;

    Ok(format!("{prefix}{next:0width$}", width = digits.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_prefix_and_padding() {
        assert_eq!(increment_masked_number("X-0042", 1).unwrap(), "X-0043");
        assert_eq!(increment_masked_number("1010-12", 3).unwrap(), "1010-15");
        assert_eq!(increment_masked_number("000", 7).unwrap(), "007");
    }

    #[test]
    fn test_zero_delta_is_identity() {
        assert_eq!(increment_masked_number("AB0009", 0).unwrap(), "AB0009");
    }

    #[test]
    fn test_width_grows_on_overflow() {
        assert_eq!(increment_masked_number("A007", 993).unwrap(), "A1000");
        assert_eq!(increment_masked_number("99", 1).unwrap(), "100");
    }

    #[test]
    fn test_only_trailing_run_is_incremented() {
        assert_eq!(increment_masked_number("12-34-0099", 1).unwrap(), "12-34-0100");
    }

    #[test]
    fn test_empty_value_is_noop() {
        assert_eq!(increment_masked_number("", 5).unwrap(), "");
    }

    #[test]
    fn test_missing_digits_is_error() {
        let err = increment_masked_number("ABC", 1).unwrap_err();
        assert_eq!(
            err,
            SerialError::InvalidSerialNumber {
                value: "ABC".into()
            }
        );
        assert!(increment_masked_number("123-", 1).is_err());
    }

    #[test]
    fn test_unicode_digits_are_not_part_of_the_run() {
        // Arabic-Indic digits are not ASCII digits.
        assert!(increment_masked_number("١٢٣", 1).is_err());
    }

    #[test]
    fn test_overflowing_run_is_error() {
        let huge = "9".repeat(40);
        assert!(matches!(
            increment_masked_number(&huge, 1),
            Err(SerialError::SerialNumberOverflow { .. })
        ));
    }

    #[test]
    fn test_absolute_offsets_match_chained_steps() {
        let mut chained = "SN-0998".to_string();
        for delta in 0..5 {
            assert_eq!(increment_masked_number("SN-0998", delta).unwrap(), chained);
            chained = increment_masked_number(&chained, 1).unwrap();
        }
    }

    #[test]
    fn test_only_numbers() {
        assert_eq!(only_numbers("1010-12/A"), "101012");
        assert_eq!(only_numbers("abc"), "");
    }
}
