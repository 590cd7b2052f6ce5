//! Charge generation settings.

use serde::Deserialize;

use crate::error::{ChargeError, Result};

/// City used when the payee profile has none.
pub const DEFAULT_CITY: &str = "NAO INFORMADO";

/// Configuration for [`PixCharger`](crate::PixCharger).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChargeConfig {
    /// City placed in tag 60 when the payee has no city on file.
    pub default_city: String,

    /// Reference used when the invoice has no code. `None` omits tag 62.
    pub fallback_transaction_id: Option<String>,

    /// Retry without an amount when the invoice total cannot be encoded.
    pub degrade_on_invalid_amount: bool,
}

impl Default for ChargeConfig {
    fn default() -> Self {
        Self {
            default_city: DEFAULT_CITY.to_string(),
            fallback_transaction_id: None,
            degrade_on_invalid_amount: false,
        }
    }
}

impl ChargeConfig {
    /// Load from a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ChargeError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChargeConfig::default();
        assert_eq!(config.default_city, "NAO INFORMADO");
        assert_eq!(config.fallback_transaction_id, None);
        assert!(!config.degrade_on_invalid_amount);
    }

    #[test]
    fn test_partial_json() {
        let config =
            ChargeConfig::from_json(r#"{ "fallback_transaction_id": "SEMCODIGO" }"#).unwrap();
        assert_eq!(config.default_city, DEFAULT_CITY);
        assert_eq!(config.fallback_transaction_id.as_deref(), Some("SEMCODIGO"));
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ChargeConfig::from_json("{}").unwrap(), ChargeConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = ChargeConfig::from_json(r#"{ "degrade_on_invalid_amount": "yes" }"#).unwrap_err();
        assert!(matches!(err, ChargeError::Config(_)));
    }
}
