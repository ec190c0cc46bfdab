//! Error types for the Serial Engine.

use thiserror::Error;

/// Failures raised by the calculation modules.  None of them are
/// recoverable locally; they propagate to the caller and abort the
/// whole batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerialError {
    /// The value has no trailing run of digits to increment.
    #[error("invalid serial number {value:?}: no trailing digits")]
    InvalidSerialNumber { value: String },

    /// The trailing digits plus the increment exceed the supported range.
    #[error("serial number {value:?} overflows when incremented by {delta}")]
    SerialNumberOverflow { value: String, delta: u64 },

    /// The weighted checksum does not fit in an `i64`.
    #[error("checksum of serial number {serial_number:?} overflows")]
    ChecksumOverflow { serial_number: String },

    /// The check digit divider must be positive.
    #[error("invalid divider {divider}: must be greater than zero")]
    InvalidDivider { divider: i64 },
}

pub type Result<T> = std::result::Result<T, SerialError>;
