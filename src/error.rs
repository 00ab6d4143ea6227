//! Errors reported while validating a card number.

use thiserror::Error;

/// Rejection reasons for a card number. Anything past validation can not
/// fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input is not exactly 16 bytes long.
    #[error("card number must have 16 digits, got {0}")]
    InvalidLength(usize),

    /// A byte other than `0`..=`9` was found.
    #[error("invalid byte {byte:#04x} at position {position}, expected a decimal digit")]
    InvalidDigit { position: usize, byte: u8 },
}
