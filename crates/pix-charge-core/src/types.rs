//! The input to the payload encoder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A static PIX charge, built fresh for each invoice rendering.
///
/// Text fields are raw; sanitization and validation happen inside
/// [`build_payload`](crate::build_payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// CPF, CNPJ, email, or phone key of the receiving account.
    pub payee_key: String,

    /// Receiver name, arbitrary text.
    pub payee_name: String,

    /// Receiver city, arbitrary text.
    pub payee_city: String,

    /// Amount to charge. `None` lets the payer enter it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Merchant reference such as an invoice code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl ChargeRequest {
    /// Create an open charge (no amount, no reference).
    pub fn new(
        payee_key: impl Into<String>,
        payee_name: impl Into<String>,
        payee_city: impl Into<String>,
    ) -> Self {
        Self {
            payee_key: payee_key.into(),
            payee_name: payee_name.into(),
            payee_city: payee_city.into(),
            amount: None,
            transaction_id: None,
        }
    }

    /// Set the amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the transaction reference.
    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }
}
