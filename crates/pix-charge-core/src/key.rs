//! PIX key classification.
//!
//! Keys are carried verbatim into the merchant account template. This
//! module only decides whether a string has the shape of one of the
//! accepted key kinds; it never rewrites it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EncodeError;

/// Longest key that still fits the merchant account template.
///
/// The template holds the 18-byte domain sub-field plus a 4-byte prefix
/// for the key sub-field, within a 99-byte value.
pub const MAX_KEY_LEN: usize = 77;

/// The accepted PIX key kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyKind {
    /// Individual taxpayer number, 11 digits.
    Cpf,
    /// Company taxpayer number, 14 digits.
    Cnpj,
    Email,
    /// E.164 phone number with leading `+`.
    Phone,
}

impl fmt::Display for PixKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Email => "email",
            Self::Phone => "phone",
        };
        f.write_str(name)
    }
}

/// A key whose shape has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixKey {
    kind: PixKeyKind,
    value: String,
}

impl PixKey {
    /// Classify `raw` as a PIX key.
    pub fn parse(raw: &str) -> Result<Self, EncodeError> {
        let kind = classify(raw).ok_or(EncodeError::InvalidKey)?;
        Ok(Self {
            kind,
            value: raw.to_string(),
        })
    }

    pub fn kind(&self) -> PixKeyKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Determine the kind of `raw`, if any.
pub fn classify(raw: &str) -> Option<PixKeyKind> {
    if raw.is_empty() || raw.len() > MAX_KEY_LEN || !raw.is_ascii() {
        return None;
    }

    let all_digits = raw.bytes().all(|b| b.is_ascii_digit());
    match raw.len() {
        11 if all_digits => return Some(PixKeyKind::Cpf),
        14 if all_digits => return Some(PixKeyKind::Cnpj),
        _ => {}
    }

    if is_phone(raw) {
        Some(PixKeyKind::Phone)
    } else if is_email(raw) {
        Some(PixKeyKind::Email)
    } else {
        None
    }
}

fn is_phone(raw: &str) -> bool {
    let Some(digits) = raw.strip_prefix('+') else {
        return false;
    };
    (10..=14).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.starts_with('0')
}

fn is_email(raw: &str) -> bool {
    if raw.bytes().any(|b| b.is_ascii_whitespace() || b.is_ascii_control()) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // At least one dot strictly inside the domain, and no empty labels.
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_keys() {
        assert_eq!(classify("11144477735"), Some(PixKeyKind::Cpf));
        assert_eq!(classify("12345678000195"), Some(PixKeyKind::Cnpj));
        assert_eq!(classify("1114447773"), None);
        assert_eq!(classify("123456780001950"), None);
    }

    #[test]
    fn test_formatted_documents_rejected() {
        // Keys pass through verbatim, so punctuation is not stripped here.
        assert_eq!(classify("111.444.777-35"), None);
        assert_eq!(classify("12.345.678/0001-95"), None);
    }

    #[test]
    fn test_email_keys() {
        assert_eq!(classify("financeiro@acme.com.br"), Some(PixKeyKind::Email));
        assert_eq!(classify("a@b.co"), Some(PixKeyKind::Email));
        assert_eq!(classify("@acme.com"), None);
        assert_eq!(classify("user@localhost"), None);
        assert_eq!(classify("user@acme..com"), None);
        assert_eq!(classify("user@.acme.com"), None);
        assert_eq!(classify("us er@acme.com"), None);
        assert_eq!(classify("a@b@c.com"), None);
        assert_eq!(classify("joão@acme.com"), None);
    }

    #[test]
    fn test_phone_keys() {
        assert_eq!(classify("+5511987654321"), Some(PixKeyKind::Phone));
        assert_eq!(classify("+551133334444"), Some(PixKeyKind::Phone));
        assert_eq!(classify("5511987654321"), None);
        assert_eq!(classify("+0511987654321"), None);
        assert_eq!(classify("+55119"), None);
        assert_eq!(classify("+55 11 98765-4321"), None);
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(classify("abc"), None);
        assert_eq!(classify(""), None);
        assert_eq!(PixKey::parse("abc"), Err(EncodeError::InvalidKey));
    }

    #[test]
    fn test_length_limit() {
        let local = "a".repeat(MAX_KEY_LEN - "@acme.com".len());
        let fits = format!("{local}@acme.com");
        assert_eq!(fits.len(), MAX_KEY_LEN);
        assert_eq!(classify(&fits), Some(PixKeyKind::Email));

        let too_long = format!("a{fits}");
        assert_eq!(classify(&too_long), None);
    }

    #[test]
    fn test_parse_keeps_value_verbatim() {
        let key = PixKey::parse("Financeiro@Acme.com.br").unwrap();
        assert_eq!(key.kind(), PixKeyKind::Email);
        assert_eq!(key.as_str(), "Financeiro@Acme.com.br");
        assert_eq!(key.to_string(), "Financeiro@Acme.com.br");
    }
}
