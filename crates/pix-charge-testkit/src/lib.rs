//! # PIX Charge Testkit
//!
//! Testing utilities for PIX charge payloads.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known payloads and checksums, including the BCB
//!   published sample, for cross-implementation verification
//! - **Generators**: Proptest strategies for keys, free text, and requests
//! - **Fixtures**: Payee profiles and invoices for integration tests
//!
//! ## Golden Vectors
//!
//! ```rust
//! use pix_charge_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, payload) in verify_all_vectors() {
//!     assert!(ok, "{name}: {payload}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use pix_charge_core::{build_payload, verify_payload};
//! use pix_charge_testkit::ChargeParams;
//!
//! proptest! {
//!     #[test]
//!     fn payload_verifies(params: ChargeParams) {
//!         let payload = build_payload(&params.request).unwrap();
//!         prop_assert!(verify_payload(&payload).is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{company_payee, email_only_payee, individual_payee, invoice};
pub use generators::ChargeParams;
pub use vectors::{
    all_vectors, crc_vectors, verify_all_vectors, verify_crc_vectors, CrcVector, GoldenVector,
    BCB_SAMPLE_PAYLOAD,
};
