//! Error types for charge generation.

use pix_charge_core::EncodeError;
use thiserror::Error;

/// Errors that can occur while producing a charge for an invoice.
#[derive(Debug, Error)]
pub enum ChargeError {
    /// The payload encoder rejected the request.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// None of the payee's documents or emails is a usable PIX key.
    #[error("payee has no usable PIX key")]
    MissingPayeeKey,

    /// Configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for charge operations.
pub type Result<T> = std::result::Result<T, ChargeError>;
