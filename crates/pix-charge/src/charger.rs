//! The charger: turns a payee and an invoice into a PIX payload.

use pix_charge_core::{build_payload, ChargeRequest, EncodeError};
use tracing::{debug, warn};

use crate::config::ChargeConfig;
use crate::error::{ChargeError, Result};
use crate::payee::{InvoiceCharge, PayeeProfile};

/// A generated charge: the request that was encoded and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixCharge {
    pub request: ChargeRequest,
    /// EMV payload, ready for "copy and paste" or a QR renderer.
    pub payload: String,
    /// Set when the amount was dropped to recover from an invalid total.
    pub degraded: bool,
}

/// Builds PIX charges for invoices.
///
/// Stateless apart from its configuration; share freely across threads.
#[derive(Debug, Clone, Default)]
pub struct PixCharger {
    config: ChargeConfig,
}

impl PixCharger {
    pub fn new(config: ChargeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChargeConfig {
        &self.config
    }

    /// Map payee and invoice data onto a [`ChargeRequest`].
    pub fn request_for(
        &self,
        payee: &PayeeProfile,
        invoice: &InvoiceCharge,
    ) -> Result<ChargeRequest> {
        let key = payee.resolve_key().ok_or(ChargeError::MissingPayeeKey)?;
        debug!(kind = %key.kind(), "resolved payee key");

        let city = payee
            .receiver_city()
            .unwrap_or(&self.config.default_city)
            .to_string();

        let transaction_id = invoice
            .reference()
            .map(str::to_string)
            .or_else(|| self.config.fallback_transaction_id.clone());

        Ok(ChargeRequest {
            payee_key: key.as_str().to_string(),
            payee_name: payee.receiver_name(),
            payee_city: city,
            amount: invoice.charge_amount(),
            transaction_id,
        })
    }

    /// Generate the charge payload for an invoice.
    pub fn charge(&self, payee: &PayeeProfile, invoice: &InvoiceCharge) -> Result<PixCharge> {
        let request = self.request_for(payee, invoice)?;

        match build_payload(&request) {
            Ok(payload) => {
                debug!(
                    len = payload.len(),
                    has_amount = request.amount.is_some(),
                    "built pix payload"
                );
                Ok(PixCharge {
                    request,
                    payload,
                    degraded: false,
                })
            }
            Err(EncodeError::InvalidAmount(reason)) if self.config.degrade_on_invalid_amount => {
                warn!(%reason, "invoice total not encodable, emitting open-amount charge");
                let request = ChargeRequest {
                    amount: None,
                    ..request
                };
                let payload = build_payload(&request)?;
                Ok(PixCharge {
                    request,
                    payload,
                    degraded: true,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
