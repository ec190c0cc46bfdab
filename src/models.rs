//! Data models for the Serial Engine.
//!
//! The `models` module defines the serialisable structs used as the
//! engine's input and output: the form configuration supplied by the
//! presentation layer, the positional weights, and the generated
//! serial number records.  Field names are camelCase on the wire so
//! that the JSON produced by the form can be deserialised directly.

use serde::{Deserialize, Serialize};

/// Configuration for a single generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// The seed serial number.  It may carry a non-numeric prefix
    /// (e.g. `"1010-"`) and must end in a run of digits.
    pub serial_number: String,
    /// How many records to generate, starting at the seed itself.
    #[serde(default)]
    pub qtd_registers: usize,
    /// Expected digit count of the serial number.  Informational only;
    /// the engine logs a warning on mismatch but never rejects.
    #[serde(default)]
    pub qtd_numbers: usize,
    /// Modulus used when deriving the check digit.  Must be positive.
    pub divider: i64,
    /// Whether the check digit is joined to the serial with a `-`.
    #[serde(default)]
    pub has_hyphen: bool,
}

/// A positional multiplier.  Weights are matched to digits by their
/// index in the list, not by `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    /// Nominal position, kept for display.
    pub position: i64,
    pub weight: i64,
}

impl Weight {
    pub fn new(position: i64, weight: i64) -> Self {
        Self { position, weight }
    }
}

/// Per-digit breakdown of a checksum computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedNumber {
    /// 1-based position of the digit in the numeric projection.
    pub order: usize,
    pub number: i64,
    pub weight: i64,
    /// `number * weight`.
    pub result: i64,
}

/// Outcome of the checksum step for one serial number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitVerifier {
    /// `sum mod divider`, always in `0..divider`.
    pub remainder: i64,
    /// The check digit.  `divider - remainder`, collapsed to `0` when
    /// that difference does not fit in a single decimal digit.
    pub subtract: u8,
    pub sum: i64,
    pub calc_numbers: Vec<CalculatedNumber>,
}

/// One generated register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerialNumberData {
    /// 1-based sequence index within the batch.
    pub order: usize,
    /// The incremented serial number, without the check digit.
    pub serial_number: String,
    pub digit_verifier: u8,
    pub serial_number_with_digit_verifier: String,
    pub remainder: i64,
    pub sum: i64,
    pub calc_numbers: Vec<CalculatedNumber>,
}
