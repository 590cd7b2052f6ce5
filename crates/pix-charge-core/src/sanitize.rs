//! Free-text sanitization for merchant name and city.
//!
//! EMV readers only guarantee a restricted alphabet, so text is folded to
//! `[A-Z0-9 ]`: diacritics are removed via compatibility decomposition,
//! a handful of letters with no decomposition are spelled out, and
//! everything else is dropped.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum length of the merchant name (tag 59).
pub const MAX_NAME_LEN: usize = 25;

/// Maximum length of the merchant city (tag 60).
pub const MAX_CITY_LEN: usize = 15;

/// Fold `text` into the EMV-safe alphabet and truncate to `max_length` bytes.
///
/// Leading spaces are skipped so they never use up the length budget, and
/// trailing spaces are trimmed after truncation so a cut never leaves a
/// dangling blank. Empty input yields an empty string.
pub fn sanitize(text: &str, max_length: usize) -> String {
    let mut out = String::with_capacity(max_length.min(text.len()));

    for c in text.nfkd().filter(|c| !is_combining_mark(*c)) {
        if out.len() >= max_length {
            break;
        }
        match transliterate(c) {
            Some(spelled) => {
                for s in spelled.chars() {
                    if out.len() < max_length {
                        out.push(s);
                    }
                }
            }
            None if c == ' ' && out.is_empty() => {}
            None if c.is_ascii_alphanumeric() || c == ' ' => out.push(c.to_ascii_uppercase()),
            None => {}
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// Letters that survive decomposition as a single non-ASCII code point.
fn transliterate(c: char) -> Option<&'static str> {
    let spelled = match c {
        'ß' => "SS",
        'æ' | 'Æ' => "AE",
        'œ' | 'Œ' => "OE",
        'ø' | 'Ø' => "O",
        'đ' | 'Đ' | 'ð' | 'Ð' => "D",
        'ł' | 'Ł' => "L",
        'þ' | 'Þ' => "TH",
        'ı' => "I",
        _ => return None,
    };
    Some(spelled)
}

/// Whether `text` is already in sanitized form.
pub fn is_sanitized(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b' ')
}
