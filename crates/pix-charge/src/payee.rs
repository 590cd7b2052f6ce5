//! Payee and invoice data, and the policy that turns them into a charge.

use pix_charge_core::key::classify;
use pix_charge_core::{PixKey, PixKeyKind};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Provider data on file for the receiving party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayeeProfile {
    pub company_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    /// Company document, formatted or bare.
    pub cnpj: Option<String>,
    /// Personal document, formatted or bare.
    pub cpf: Option<String>,
    pub email_business: Option<String>,
    pub email: Option<String>,
}

impl PayeeProfile {
    /// Pick the PIX key: CNPJ, then CPF, then business email, then email.
    ///
    /// Documents are stripped to their digits. The first candidate with a
    /// valid key shape wins.
    pub fn resolve_key(&self) -> Option<PixKey> {
        let documents = [
            (self.cnpj.as_deref(), PixKeyKind::Cnpj),
            (self.cpf.as_deref(), PixKeyKind::Cpf),
        ];
        let from_documents = documents.into_iter().filter_map(|(doc, kind)| {
            let digits: String = doc?.chars().filter(char::is_ascii_digit).collect();
            (classify(&digits) == Some(kind)).then_some(digits)
        });

        let emails = [self.email_business.as_deref(), self.email.as_deref()];
        let from_emails = emails.into_iter().flatten().filter_map(|email| {
            let email = email.trim();
            (classify(email) == Some(PixKeyKind::Email)).then(|| email.to_string())
        });

        from_documents
            .chain(from_emails)
            .find_map(|candidate| PixKey::parse(&candidate).ok())
    }

    /// Company name, or the personal name when no company is on file.
    pub fn receiver_name(&self) -> String {
        match self.company_name.as_deref().map(str::trim) {
            Some(company) if !company.is_empty() => company.to_string(),
            _ => {
                let first = self.first_name.as_deref().unwrap_or_default().trim();
                let last = self.last_name.as_deref().unwrap_or_default().trim();
                format!("{first} {last}").trim().to_string()
            }
        }
    }

    /// City on file, if any.
    pub fn receiver_city(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// The billing facts of an invoice that feed a charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCharge {
    /// Invoice total in BRL.
    pub total: Decimal,
    /// Invoice code, used as the transaction reference.
    #[serde(default)]
    pub code: Option<String>,
}

impl InvoiceCharge {
    pub fn new(total: Decimal, code: Option<String>) -> Self {
        Self { total, code }
    }

    /// Total rounded to centavos, or `None` for a zero total.
    pub fn charge_amount(&self) -> Option<Decimal> {
        let rounded = self
            .total
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        (!rounded.is_zero()).then_some(rounded)
    }

    /// Invoice code, if non-blank.
    pub fn reference(&self) -> Option<&str> {
        self.code.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}
