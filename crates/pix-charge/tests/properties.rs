//! Property tests for the key policy and the degraded fallback.

use proptest::prelude::*;
use rust_decimal::Decimal;

use pix_charge::{verify_payload, ChargeConfig, InvoiceCharge, PayeeProfile, PixCharger, PixKeyKind};
use pix_charge_testkit::generators::{amount, cnpj_key, cpf_key, email_key, free_text};

/// Insert document punctuation the way provider records usually store it.
fn punctuate(digits: &str) -> String {
    match digits.len() {
        11 => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
        14 => format!(
            "{}.{}.{}/{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..]
        ),
        _ => digits.to_string(),
    }
}

fn document(key: impl Strategy<Value = String>) -> impl Strategy<Value = Option<String>> {
    proptest::option::of((key, any::<bool>()).prop_map(|(digits, formatted)| {
        if formatted {
            punctuate(&digits)
        } else {
            digits
        }
    }))
}

proptest! {
    #[test]
    fn test_resolve_key_follows_priority(
        cnpj in document(cnpj_key()),
        cpf in document(cpf_key()),
        email_business in proptest::option::of(email_key()),
        email in proptest::option::of(email_key()),
    ) {
        let payee = PayeeProfile {
            cnpj: cnpj.clone(),
            cpf: cpf.clone(),
            email_business: email_business.clone(),
            email: email.clone(),
            ..Default::default()
        };
        let digits = |s: &String| s.chars().filter(char::is_ascii_digit).collect::<String>();

        let expected = cnpj
            .as_ref()
            .map(|c| (PixKeyKind::Cnpj, digits(c)))
            .or_else(|| cpf.as_ref().map(|c| (PixKeyKind::Cpf, digits(c))))
            .or_else(|| email_business.clone().map(|e| (PixKeyKind::Email, e)))
            .or_else(|| email.clone().map(|e| (PixKeyKind::Email, e)));

        let resolved = payee.resolve_key().map(|k| (k.kind(), k.as_str().to_string()));
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn test_degraded_charge_is_open_and_valid(
        name in free_text(),
        city in free_text(),
        owed in amount(),
    ) {
        let charger = PixCharger::new(ChargeConfig {
            degrade_on_invalid_amount: true,
            ..Default::default()
        });
        let payee = PayeeProfile {
            company_name: Some(name),
            city: Some(city),
            cpf: Some("11144477735".into()),
            ..Default::default()
        };
        let refund = InvoiceCharge::new(-owed, Some("NC1".into()));

        let charge = charger.charge(&payee, &refund).unwrap();
        prop_assert!(charge.degraded);
        prop_assert_eq!(charge.request.amount, None);

        let decoded = verify_payload(&charge.payload).unwrap();
        prop_assert_eq!(decoded.amount(), None);
        prop_assert_eq!(decoded.transaction_id(), Some("NC1"));
    }

    #[test]
    fn test_valid_totals_never_degrade(owed in amount()) {
        let charger = PixCharger::new(ChargeConfig {
            degrade_on_invalid_amount: true,
            ..Default::default()
        });
        let payee = PayeeProfile {
            company_name: Some("Acme".into()),
            cpf: Some("11144477735".into()),
            ..Default::default()
        };

        let charge = charger.charge(&payee, &InvoiceCharge::new(owed, None)).unwrap();
        prop_assert!(!charge.degraded);
        let decoded = verify_payload(&charge.payload).unwrap();
        prop_assert_eq!(decoded.amount(), Some(owed));
        prop_assert!(decoded.amount().map_or(false, |a| a > Decimal::ZERO));
    }
}
