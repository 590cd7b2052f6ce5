//! EMV tag-length-value encoding.
//!
//! Each field is a two-digit tag, a two-digit decimal length, then the
//! value. Lengths count bytes, and payloads are pure ASCII, so bytes and
//! characters coincide.

use std::fmt;

/// Largest value a two-digit length prefix can describe.
pub const MAX_VALUE_LEN: usize = 99;

/// A two-digit EMV tag, `00` through `99`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(u8);

impl Tag {
    /// Create a tag from its numeric identifier.
    ///
    /// Panics if `id > 99`.
    pub const fn new(id: u8) -> Self {
        assert!(id <= 99, "EMV tags are two decimal digits");
        Self(id)
    }

    /// Parse a tag from its two-digit text form.
    pub fn parse(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [hi, lo] if hi.is_ascii_digit() && lo.is_ascii_digit() => {
                Some(Self((hi - b'0') * 10 + (lo - b'0')))
            }
            _ => None,
        }
    }

    /// The numeric identifier.
    pub const fn id(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:02})", self.0)
    }
}

/// Tags used by PIX static charges.
pub mod tags {
    use super::Tag;

    pub const PAYLOAD_FORMAT_INDICATOR: Tag = Tag::new(0);
    pub const POINT_OF_INITIATION_METHOD: Tag = Tag::new(1);
    pub const MERCHANT_ACCOUNT_INFORMATION: Tag = Tag::new(26);
    pub const MERCHANT_CATEGORY_CODE: Tag = Tag::new(52);
    pub const TRANSACTION_CURRENCY: Tag = Tag::new(53);
    pub const TRANSACTION_AMOUNT: Tag = Tag::new(54);
    pub const COUNTRY_CODE: Tag = Tag::new(58);
    pub const MERCHANT_NAME: Tag = Tag::new(59);
    pub const MERCHANT_CITY: Tag = Tag::new(60);
    pub const ADDITIONAL_DATA_FIELD: Tag = Tag::new(62);
    pub const CRC16: Tag = Tag::new(63);

    /// Sub-tags of the merchant account information template (26).
    pub mod account {
        use super::Tag;

        pub const GLOBALLY_UNIQUE_IDENTIFIER: Tag = Tag::new(0);
        pub const PIX_KEY: Tag = Tag::new(1);
    }

    /// Sub-tags of the additional data field template (62).
    pub mod additional {
        use super::Tag;

        pub const REFERENCE_LABEL: Tag = Tag::new(5);
    }
}

/// Encode a single field: `tag || len(value) as 2 digits || value`.
///
/// Panics if `tag` is not exactly two ASCII digits or if `value` is longer
/// than [`MAX_VALUE_LEN`] bytes. Both are caller bugs; longer content must
/// be split into a nested template first.
pub fn encode_field(tag: &str, value: &str) -> String {
    let tag = Tag::parse(tag).unwrap_or_else(|| panic!("malformed EMV tag {tag:?}"));
    let mut buf = String::with_capacity(4 + value.len());
    encode_field_into(&mut buf, tag, value);
    buf
}

/// Append an encoded field to `buf`.
///
/// Panics if `value` is longer than [`MAX_VALUE_LEN`] bytes.
pub fn encode_field_into(buf: &mut String, tag: Tag, value: &str) {
    assert!(
        value.len() <= MAX_VALUE_LEN,
        "value for tag {tag} is {} bytes, limit is {MAX_VALUE_LEN}",
        value.len()
    );
    buf.push_str(&format!("{tag}{:02}", value.len()));
    buf.push_str(value);
}
