//! # PIX Charge Core
//!
//! Pure codec for static PIX charges in the EMV QR Code Merchant-Presented
//! Mode format.
//!
//! This crate contains no I/O and no logging. Every function is a pure
//! transformation of its input and is safe to call from any thread.
//!
//! ## Pipeline
//!
//! - [`mod@sanitize`] folds free text (merchant name, city) into `[A-Z0-9 ]`
//! - [`tlv`] renders tag-length-value fields, nested one level deep
//! - [`mod@crc`] computes the CRC-16/CCITT-FALSE closing field
//! - [`payload`] lays out the fields in their fixed order and seals them
//!
//! ```rust
//! use pix_charge_core::{build_payload, verify_payload, ChargeRequest};
//!
//! let req = ChargeRequest::new("11144477735", "João da Silva", "São Paulo");
//! let payload = build_payload(&req).unwrap();
//! assert!(payload.starts_with("000201010212"));
//!
//! let decoded = verify_payload(&payload).unwrap();
//! assert_eq!(decoded.merchant_name(), Some("JOAO DA SILVA"));
//! ```

pub mod amount;
pub mod crc;
pub mod decode;
pub mod error;
pub mod key;
pub mod payload;
pub mod sanitize;
pub mod tlv;
pub mod types;

pub use amount::format_amount;
pub use crc::{crc16_ccitt, crc16_hex};
pub use decode::{parse_fields, verify_payload, DecodedPayload, TlvField};
pub use error::{DecodeError, EncodeError, MandatoryField};
pub use key::{PixKey, PixKeyKind};
pub use payload::{build_payload, charge_fields, encode_fields, Field};
pub use sanitize::sanitize;
pub use tlv::{encode_field, Tag};
pub use types::ChargeRequest;
