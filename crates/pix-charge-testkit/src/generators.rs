//! Proptest generators for property-based testing.

use proptest::prelude::*;
use rust_decimal::Decimal;

use pix_charge_core::ChargeRequest;

/// Generate a CPF-shaped key.
pub fn cpf_key() -> impl Strategy<Value = String> {
    "[0-9]{11}".prop_map(String::from)
}

/// Generate a CNPJ-shaped key.
pub fn cnpj_key() -> impl Strategy<Value = String> {
    "[0-9]{14}".prop_map(String::from)
}

/// Generate an email key short enough for the account template.
pub fn email_key() -> impl Strategy<Value = String> {
    "[a-z0-9._%+-]{1,30}@[a-z0-9-]{1,20}\\.[a-z]{2,6}".prop_map(String::from)
}

/// Generate an E.164 phone key.
pub fn phone_key() -> impl Strategy<Value = String> {
    "\\+[1-9][0-9]{9,13}".prop_map(String::from)
}

/// Generate any valid PIX key.
pub fn pix_key() -> impl Strategy<Value = String> {
    prop_oneof![cpf_key(), cnpj_key(), email_key(), phone_key()]
}

/// Generate free text that sanitizes to something non-empty.
///
/// Starts with a letter, then mixes accented Latin letters, digits,
/// punctuation, and spaces.
pub fn free_text() -> impl Strategy<Value = String> {
    "[a-zA-ZáâãéêíóôõúçÁÂÃÉÍÓÕÚÇ][ !.,&'a-zA-ZáàâãéêíóôõúçÁÀÂÃÉÊÍÓÔÕÚÇ0-9-]{0,40}"
        .prop_map(String::from)
}

/// Generate a valid amount in BRL: 0.01 up to 99,999,999.99.
pub fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..=9_999_999_999i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate a printable ASCII transaction id, possibly past the 25-byte limit.
pub fn transaction_id() -> impl Strategy<Value = String> {
    "[ -~]{1,40}".prop_map(String::from)
}

/// Parameters for generating a charge request.
#[derive(Debug, Clone)]
pub struct ChargeParams {
    pub request: ChargeRequest,
}

impl Arbitrary for ChargeParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            pix_key(),
            free_text(),
            free_text(),
            proptest::option::of(amount()),
            proptest::option::of(transaction_id()),
        )
            .prop_map(|(key, name, city, amount, txid)| ChargeParams {
                request: ChargeRequest {
                    payee_key: key,
                    payee_name: name,
                    payee_city: city,
                    amount,
                    transaction_id: txid,
                },
            })
            .boxed()
    }
}
