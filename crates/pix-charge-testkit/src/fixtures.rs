//! Test fixtures and helpers.
//!
//! Payee profiles shaped like the provider records invoices are issued
//! from.

use pix_charge::{InvoiceCharge, PayeeProfile};
use rust_decimal::Decimal;

/// A company provider with CNPJ, CPF, and both emails on file.
pub fn company_payee() -> PayeeProfile {
    PayeeProfile {
        company_name: Some("Acme Comércio Ltda".into()),
        first_name: Some("José".into()),
        last_name: Some("Araújo".into()),
        city: Some("Rio de Janeiro".into()),
        cnpj: Some("12.345.678/0001-95".into()),
        cpf: Some("111.444.777-35".into()),
        email_business: Some("financeiro@acme.com.br".into()),
        email: Some("jose@gmail.com".into()),
    }
}

/// An individual provider with only a CPF.
pub fn individual_payee() -> PayeeProfile {
    PayeeProfile {
        first_name: Some("João".into()),
        last_name: Some("da Silva".into()),
        city: Some("São Paulo".into()),
        cpf: Some("111.444.777-35".into()),
        ..Default::default()
    }
}

/// A provider reachable only by personal email, with no city on file.
pub fn email_only_payee() -> PayeeProfile {
    PayeeProfile {
        first_name: Some("Maria".into()),
        last_name: Some("Souza".into()),
        email: Some("maria.souza@example.com".into()),
        ..Default::default()
    }
}

/// An invoice for `cents` centavos with the given code.
pub fn invoice(cents: i64, code: &str) -> InvoiceCharge {
    InvoiceCharge::new(Decimal::new(cents, 2), Some(code.to_string()))
}
