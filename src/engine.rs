//! Serial number batch generation.
//!
//! The `engine` module turns a [`FormConfig`] and a list of weights
//! into an ordered list of [`SerialNumberData`].  Register `i` is the
//! seed incremented by `i`, so every register can be computed on its
//! own; the [`rayon`] crate spreads them across CPU cores and the
//! indexed collect keeps them in order.

use crate::checksum::calculate_digit_verifier;
use crate::error::{Result, SerialError};
use crate::mask::{increment_masked_number, only_numbers};
use crate::models::{FormConfig, SerialNumberData, Weight};
use rayon::prelude::*;

/// Generates `config.qtd_registers` serial numbers with their check digits.
///
/// An empty seed or a zero register count yields an empty list.  Any
/// failure aborts the whole batch; no partial result is returned.
pub fn generate_numbers(config: &FormConfig, weights: &[Weight]) -> Result<Vec<SerialNumberData>> {
    if config.serial_number.is_empty() || config.qtd_registers == 0 {
        return Ok(Vec::new());
    }
    if config.divider <= 0 {
        return Err(SerialError::InvalidDivider {
            divider: config.divider,
        });
    }

    (0..config.qtd_registers)
        .into_par_iter()
        .map(|index| build_record(config, weights, index))
        .collect()
}

/// Counts records whose digit count differs from `config.qtd_numbers`.
/// Always zero when no expected length is configured.
pub fn digit_count_mismatches(config: &FormConfig, records: &[SerialNumberData]) -> usize {
    if config.qtd_numbers == 0 {
        return 0;
    }
    records
        .iter()
        .filter(|r| only_numbers(&r.serial_number).len() != config.qtd_numbers)
        .count()
}

fn build_record(config: &FormConfig, weights: &[Weight], index: usize) -> Result<SerialNumberData> {
    let serial_number = increment_masked_number(&config.serial_number, index as u64)?;
    let verifier = calculate_digit_verifier(&serial_number, weights, config.divider)?;
    let serial_number_with_digit_verifier = if config.has_hyphen {
        format!("{}-{}", serial_number, verifier.subtract)
    } else {
        format!("{}{}", serial_number, verifier.subtract)
    };

    Ok(SerialNumberData {
        order: index + 1,
        serial_number,
        digit_verifier: verifier.subtract,
        serial_number_with_digit_verifier,
        remainder: verifier.remainder,
        sum: verifier.sum,
        calc_numbers: verifier.calc_numbers,
    })
}
