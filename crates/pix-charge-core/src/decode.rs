//! Parsing and verification of existing payloads.
//!
//! Used to check payloads produced elsewhere (or by us) before they are
//! rendered: every length prefix must match, and the trailing CRC must be
//! the checksum of everything before it.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::crc::{crc16_ccitt, crc16_hex};
use crate::error::DecodeError;
use crate::tlv::{tags, Tag};

/// A parsed field borrowing from the payload text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvField<'a> {
    pub tag: Tag,
    pub value: &'a str,
    /// Byte offset of the tag within the parsed text.
    pub offset: usize,
}

impl<'a> TlvField<'a> {
    /// Parse the value as a nested template.
    pub fn children(&self) -> Result<Vec<TlvField<'a>>, DecodeError> {
        parse_fields(self.value)
    }
}

/// Parse one level of TLV fields.
pub fn parse_fields(input: &str) -> Result<Vec<TlvField<'_>>, DecodeError> {
    if !input.is_ascii() {
        return Err(DecodeError::NonAscii);
    }

    let mut fields = Vec::new();
    let mut pos = 0;
    while pos < input.len() {
        if pos + 4 > input.len() {
            return Err(DecodeError::Truncated { offset: pos });
        }
        let tag = Tag::parse(&input[pos..pos + 2]).ok_or(DecodeError::InvalidTag { offset: pos })?;
        let len = parse_len(&input[pos + 2..pos + 4])
            .ok_or(DecodeError::InvalidLength { offset: pos + 2 })?;

        let start = pos + 4;
        let end = start + len;
        if end > input.len() {
            return Err(DecodeError::Truncated { offset: pos });
        }
        fields.push(TlvField {
            tag,
            value: &input[start..end],
            offset: pos,
        });
        pos = end;
    }
    Ok(fields)
}

fn parse_len(s: &str) -> Option<usize> {
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// A payload whose structure and checksum have been verified.
#[derive(Debug, Clone)]
pub struct DecodedPayload<'a> {
    fields: Vec<TlvField<'a>>,
}

impl<'a> DecodedPayload<'a> {
    /// All top-level fields, CRC included, in payload order.
    pub fn fields(&self) -> &[TlvField<'a>] {
        &self.fields
    }

    /// The first top-level field with `tag`.
    pub fn field(&self, tag: Tag) -> Option<&TlvField<'a>> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    fn value(&self, tag: Tag) -> Option<&'a str> {
        self.field(tag).map(|f| f.value)
    }

    fn child_value(&self, tag: Tag, child: Tag) -> Option<&'a str> {
        let parent = self.field(tag)?;
        parent
            .children()
            .ok()?
            .into_iter()
            .find(|f| f.tag == child)
            .map(|f| f.value)
    }

    /// The PIX key from the merchant account template.
    pub fn pix_key(&self) -> Option<&'a str> {
        self.child_value(tags::MERCHANT_ACCOUNT_INFORMATION, tags::account::PIX_KEY)
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.value(tags::TRANSACTION_AMOUNT)
            .and_then(|v| Decimal::from_str(v).ok())
    }

    pub fn merchant_name(&self) -> Option<&'a str> {
        self.value(tags::MERCHANT_NAME)
    }

    pub fn merchant_city(&self) -> Option<&'a str> {
        self.value(tags::MERCHANT_CITY)
    }

    /// The reference label from the additional data template.
    pub fn transaction_id(&self) -> Option<&'a str> {
        self.child_value(tags::ADDITIONAL_DATA_FIELD, tags::additional::REFERENCE_LABEL)
    }

    /// The declared checksum, as 4 hex digits.
    pub fn crc(&self) -> &'a str {
        // verify_payload guarantees the last field is the CRC.
        self.fields.last().map(|f| f.value).unwrap_or_default()
    }
}

/// Parse `payload` and check its CRC.
pub fn verify_payload(payload: &str) -> Result<DecodedPayload<'_>, DecodeError> {
    let fields = parse_fields(payload)?;

    let crc_field = match fields.last() {
        Some(f) if f.tag == tags::CRC16 && f.value.len() == 4 => *f,
        _ => return Err(DecodeError::MissingCrc),
    };

    let covered = &payload[..crc_field.offset + 4];
    let expected = crc16_hex(crc16_ccitt(covered.as_bytes()));
    if !expected.eq_ignore_ascii_case(crc_field.value) {
        return Err(DecodeError::CrcMismatch {
            expected,
            actual: crc_field.value.to_string(),
        });
    }

    Ok(DecodedPayload { fields })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sample from the BCB "Manual de Padrões para Iniciação do Pix".
    const BCB_SAMPLE: &str = "00020126580014br.gov.bcb.pix0136123e4567-e12b-12d1-a456-426655440000\
                              5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***63041D3D";

    #[test]
    fn test_verify_published_sample() {
        let decoded = verify_payload(BCB_SAMPLE).unwrap();
        assert_eq!(decoded.pix_key(), Some("123e4567-e12b-12d1-a456-426655440000"));
        assert_eq!(decoded.merchant_name(), Some("Fulano de Tal"));
        assert_eq!(decoded.merchant_city(), Some("BRASILIA"));
        assert_eq!(decoded.transaction_id(), Some("***"));
        assert_eq!(decoded.amount(), None);
        assert_eq!(decoded.crc(), "1D3D");
    }

    #[test]
    fn test_lowercase_crc_accepted() {
        let lower = BCB_SAMPLE.replace("1D3D", "1d3d");
        assert!(verify_payload(&lower).is_ok());
    }

    #[test]
    fn test_crc_mismatch() {
        let tampered = BCB_SAMPLE.replace("Fulano", "Fulana");
        assert_eq!(
            verify_payload(&tampered).unwrap_err(),
            DecodeError::CrcMismatch {
                expected: crc16_hex(crc16_ccitt(
                    tampered[..tampered.len() - 4].as_bytes()
                )),
                actual: "1D3D".into(),
            }
        );
    }

    #[test]
    fn test_missing_crc() {
        assert_eq!(
            verify_payload("000201").unwrap_err(),
            DecodeError::MissingCrc
        );
        assert_eq!(verify_payload("").unwrap_err(), DecodeError::MissingCrc);
    }

    #[test]
    fn test_truncated_value() {
        assert_eq!(
            parse_fields("000201590").unwrap_err(),
            DecodeError::Truncated { offset: 6 }
        );
        assert_eq!(
            parse_fields("0002015910ABC").unwrap_err(),
            DecodeError::Truncated { offset: 6 }
        );
    }

    #[test]
    fn test_bad_prefixes() {
        assert_eq!(
            parse_fields("A00201").unwrap_err(),
            DecodeError::InvalidTag { offset: 0 }
        );
        assert_eq!(
            parse_fields("00X101").unwrap_err(),
            DecodeError::InvalidLength { offset: 2 }
        );
        assert_eq!(parse_fields("0002ção").unwrap_err(), DecodeError::NonAscii);
    }

    #[test]
    fn test_nested_children() {
        let fields = parse_fields("26330014br.gov.bcb.pix011111144477735").unwrap();
        assert_eq!(fields.len(), 1);
        let children = fields[0].children().unwrap();
        assert_eq!(children[0].value, "br.gov.bcb.pix");
        assert_eq!(children[1].tag, tags::account::PIX_KEY);
        assert_eq!(children[1].value, "11144477735");
    }
}
