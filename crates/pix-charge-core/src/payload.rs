//! Payload assembly.
//!
//! A static charge is an ordered list of [`Field`]s. The order and the
//! optional entries are data, not control flow: [`charge_fields`] lays out
//! the template and [`encode_fields`] walks it.

use crate::amount::format_amount;
use crate::crc::{crc16_ccitt, crc16_hex};
use crate::error::{EncodeError, MandatoryField};
use crate::key::PixKey;
use crate::sanitize::{sanitize, MAX_CITY_LEN, MAX_NAME_LEN};
use crate::tlv::{encode_field_into, tags, Tag};
use crate::types::ChargeRequest;

/// Globally unique identifier of the PIX arrangement (tag 26, sub-tag 00).
pub const PIX_GUI: &str = "br.gov.bcb.pix";

/// Payload format indicator value.
pub const PAYLOAD_FORMAT: &str = "01";

/// Point of initiation method for a reusable (static) code.
pub const STATIC_INITIATION: &str = "12";

/// Merchant category code for "not informed".
pub const UNCLASSIFIED_MCC: &str = "0000";

/// ISO 4217 numeric code for the Brazilian real.
pub const CURRENCY_BRL: &str = "986";

/// ISO 3166 country code.
pub const COUNTRY_BR: &str = "BR";

/// EMV limit on the reference label sub-field (tag 62, sub-tag 05).
pub const MAX_REFERENCE_LEN: usize = 25;

/// Tag and length of the trailing CRC field, covered by the checksum.
pub const CRC_PREFIX: &str = "6304";

/// One step of the payload template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A constant mandated by the format.
    Fixed(Tag, &'static str),
    /// A value computed from the request.
    Value(Tag, String),
    /// A template whose value is the concatenation of its children.
    Nested(Tag, Vec<Field>),
    /// A field emitted only when present.
    Conditional(Option<Box<Field>>),
}

impl Field {
    /// Wrap an optional field.
    pub fn optional(field: Option<Field>) -> Self {
        Self::Conditional(field.map(Box::new))
    }

    /// Append this field's encoding to `buf`.
    pub fn encode_into(&self, buf: &mut String) {
        match self {
            Self::Fixed(tag, value) => encode_field_into(buf, *tag, value),
            Self::Value(tag, value) => encode_field_into(buf, *tag, value),
            Self::Nested(tag, children) => {
                let inner = encode_fields(children);
                encode_field_into(buf, *tag, &inner);
            }
            Self::Conditional(Some(field)) => field.encode_into(buf),
            Self::Conditional(None) => {}
        }
    }
}

/// Concatenate the encodings of `fields` in order.
pub fn encode_fields(fields: &[Field]) -> String {
    let mut buf = String::new();
    for field in fields {
        field.encode_into(&mut buf);
    }
    buf
}

/// Validate `req` and lay out its fields, CRC excluded.
///
/// Every value produced here is within its TLV limit, so encoding the
/// result cannot panic.
pub fn charge_fields(req: &ChargeRequest) -> Result<Vec<Field>, EncodeError> {
    let key = PixKey::parse(&req.payee_key)?;

    let amount = req.amount.map(format_amount).transpose()?;

    let name = sanitize(&req.payee_name, MAX_NAME_LEN);
    if name.is_empty() {
        return Err(EncodeError::EmptyMandatoryField(MandatoryField::MerchantName));
    }
    let city = sanitize(&req.payee_city, MAX_CITY_LEN);
    if city.is_empty() {
        return Err(EncodeError::EmptyMandatoryField(MandatoryField::MerchantCity));
    }

    let reference = match req.transaction_id.as_deref() {
        Some(id) if !id.is_empty() => Some(reference_label(id)?),
        _ => None,
    };

    Ok(vec![
        Field::Fixed(tags::PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT),
        Field::Fixed(tags::POINT_OF_INITIATION_METHOD, STATIC_INITIATION),
        Field::Nested(
            tags::MERCHANT_ACCOUNT_INFORMATION,
            vec![
                Field::Fixed(tags::account::GLOBALLY_UNIQUE_IDENTIFIER, PIX_GUI),
                Field::Value(tags::account::PIX_KEY, key.as_str().to_string()),
            ],
        ),
        Field::Fixed(tags::MERCHANT_CATEGORY_CODE, UNCLASSIFIED_MCC),
        Field::Fixed(tags::TRANSACTION_CURRENCY, CURRENCY_BRL),
        Field::optional(amount.map(|a| Field::Value(tags::TRANSACTION_AMOUNT, a))),
        Field::Fixed(tags::COUNTRY_CODE, COUNTRY_BR),
        Field::Value(tags::MERCHANT_NAME, name),
        Field::Value(tags::MERCHANT_CITY, city),
        Field::optional(reference.map(|r| {
            Field::Nested(
                tags::ADDITIONAL_DATA_FIELD,
                vec![Field::Value(tags::additional::REFERENCE_LABEL, r)],
            )
        })),
    ])
}

/// Truncate a transaction id to the reference label limit.
///
/// The id is not filtered, but it must be printable ASCII to keep the
/// payload ASCII.
fn reference_label(id: &str) -> Result<String, EncodeError> {
    if !id.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        return Err(EncodeError::InvalidTransactionId);
    }
    Ok(id[..id.len().min(MAX_REFERENCE_LEN)].to_string())
}

/// Append the CRC field to an encoded body.
pub fn seal(mut body: String) -> String {
    body.push_str(CRC_PREFIX);
    let crc = crc16_ccitt(body.as_bytes());
    body.push_str(&crc16_hex(crc));
    body
}

/// Build the complete static charge payload for `req`.
///
/// Returns either a full payload, CRC included, or an error; never a
/// partial string.
pub fn build_payload(req: &ChargeRequest) -> Result<String, EncodeError> {
    let fields = charge_fields(req)?;
    Ok(seal(encode_fields(&fields)))
}
