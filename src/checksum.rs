//! Weighted check digit calculation.
//!
//! Only the digits of a serial number take part in the checksum; any
//! prefix, separator or hyphen is dropped first.  Each digit is
//! multiplied by the weight at the same index and the products are
//! summed.  The check digit is `divider - (sum mod divider)`, except
//! that any difference above 9 collapses to `0`.

use crate::error::{Result, SerialError};
use crate::mask::only_numbers;
use crate::models::{CalculatedNumber, DigitVerifier, Weight};

/// Weight for the digit at `index`, or `0` when the list is shorter.
fn weight_at(weights: &[Weight], index: usize) -> i64 {
    weights.get(index).map_or(0, |w| w.weight)
}

/// Computes the weighted sum, remainder and check digit of `serial_number`.
pub fn calculate_digit_verifier(
    serial_number: &str,
    weights: &[Weight],
    divider: i64,
) -> Result<DigitVerifier> {
    if divider <= 0 {
        return Err(SerialError::InvalidDivider { divider });
    }

    let overflow = || SerialError::ChecksumOverflow {
        serial_number: serial_number.to_string(),
    };

    let calc_numbers = only_numbers(serial_number)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(index, digit)| -> Result<CalculatedNumber> {
            let number = i64::from(digit);
            let weight = weight_at(weights, index);
            let result = number.checked_mul(weight).ok_or_else(overflow)?;
            Ok(CalculatedNumber {
                order: index + 1,
                number,
                weight,
                result,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let sum = calc_numbers
        .iter()
        .try_fold(0i64, |acc, c| acc.checked_add(c.result))
        .ok_or_else(overflow)?;
    // rem_euclid keeps the remainder in 0..divider for negative weights too.
    let remainder = sum.rem_euclid(divider);
    let subtract = match divider - remainder {
        d @ 0..=9 => d as u8,
        _ => 0,
    };

    Ok(DigitVerifier {
        remainder,
        subtract,
        sum,
        calc_numbers,
    })
}
