//! # PIX Charge
//!
//! Static PIX charges for invoices.
//!
//! ## Overview
//!
//! The [`core`] crate is a pure codec from a [`ChargeRequest`] to an EMV
//! payload string. This crate sits in front of it:
//!
//! - **Key policy**: choose the payee's PIX key from the documents and
//!   emails on file (CNPJ, then CPF, then business email, then email)
//! - **Invoice mapping**: receiver name and city, total, invoice code
//! - **Configuration**: default city, fallback reference, degraded mode
//! - **Logging**: `tracing` events for key resolution and fallbacks
//!
//! ## Usage
//!
//! ```rust
//! use pix_charge::{ChargeConfig, InvoiceCharge, PayeeProfile, PixCharger};
//! use rust_decimal::Decimal;
//!
//! let payee = PayeeProfile {
//!     company_name: Some("Acme Comércio Ltda".into()),
//!     city: Some("Rio de Janeiro".into()),
//!     cnpj: Some("12.345.678/0001-95".into()),
//!     ..Default::default()
//! };
//! let invoice = InvoiceCharge::new(Decimal::new(150000, 2), Some("FAT0042".into()));
//!
//! let charger = PixCharger::new(ChargeConfig::default());
//! let charge = charger.charge(&payee, &invoice).unwrap();
//! assert!(charge.payload.ends_with("63046DBA"));
//! ```

pub mod charger;
pub mod config;
pub mod error;
pub mod payee;

// Re-export the codec
pub use pix_charge_core as core;

pub use charger::{PixCharge, PixCharger};
pub use config::ChargeConfig;
pub use error::{ChargeError, Result};
pub use payee::{InvoiceCharge, PayeeProfile};

pub use pix_charge_core::{build_payload, verify_payload, ChargeRequest, EncodeError, PixKeyKind};
