//! Error types for the PIX charge codec.

use thiserror::Error;

/// Errors produced while building a charge payload.
///
/// Every variant is a deterministic input-validation failure. Re-invoking
/// with the same request yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The payee key matches none of the accepted key shapes.
    #[error("payee key is not a CPF, CNPJ, email, or phone key")]
    InvalidKey,

    /// Merchant name or city sanitized to nothing.
    #[error("mandatory field {0} is empty after sanitization")]
    EmptyMandatoryField(MandatoryField),

    /// Amount is non-positive, too precise, or too wide for tag 54.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Transaction id would put non-ASCII bytes into the payload.
    #[error("transaction id contains characters outside printable ASCII")]
    InvalidTransactionId,
}

/// The mandatory free-text fields checked for emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandatoryField {
    /// Tag 59.
    MerchantName,
    /// Tag 60.
    MerchantCity,
}

impl std::fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MerchantName => f.write_str("merchant name"),
            Self::MerchantCity => f.write_str("merchant city"),
        }
    }
}

/// Errors produced while parsing or verifying an existing payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload is not pure ASCII.
    #[error("payload contains non-ASCII bytes")]
    NonAscii,

    /// A field runs past the end of the input.
    #[error("payload truncated at offset {offset}")]
    Truncated { offset: usize },

    /// A tag is not two decimal digits.
    #[error("invalid tag at offset {offset}")]
    InvalidTag { offset: usize },

    /// A length prefix is not two decimal digits.
    #[error("invalid length prefix at offset {offset}")]
    InvalidLength { offset: usize },

    /// The last field is not a 4-character tag 63.
    #[error("payload does not end with a CRC field")]
    MissingCrc,

    /// The declared checksum differs from the computed one.
    #[error("CRC mismatch: payload declares {actual}, computed {expected}")]
    CrcMismatch { expected: String, actual: String },
}
