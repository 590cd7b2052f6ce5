//! Transaction amount validation and rendering (tag 54).

use rust_decimal::Decimal;

use crate::error::EncodeError;

/// EMV limit on the rendered amount, decimal point included.
pub const MAX_AMOUNT_LEN: usize = 13;

/// Render `amount` as `digits.dd` for tag 54.
///
/// Rejects negative and zero amounts, amounts with more than two
/// significant fractional digits, and amounts too wide for the field.
/// Trailing zeros beyond the second place are accepted (`125.500`).
pub fn format_amount(amount: Decimal) -> Result<String, EncodeError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EncodeError::InvalidAmount(format!("{amount} is negative")));
    }
    if amount.is_zero() {
        return Err(EncodeError::InvalidAmount("amount must be positive".into()));
    }
    if amount.normalize().scale() > 2 {
        return Err(EncodeError::InvalidAmount(format!(
            "{amount} has more than two decimal places"
        )));
    }

    let rendered = format!("{:.2}", amount);
    if rendered.len() > MAX_AMOUNT_LEN {
        return Err(EncodeError::InvalidAmount(format!(
            "{rendered} exceeds {MAX_AMOUNT_LEN} characters"
        )));
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_two_decimal_rendering() {
        assert_eq!(format_amount(dec("125.50")).unwrap(), "125.50");
        assert_eq!(format_amount(dec("125.5")).unwrap(), "125.50");
        assert_eq!(format_amount(dec("1500")).unwrap(), "1500.00");
        assert_eq!(format_amount(dec("0.01")).unwrap(), "0.01");
        assert_eq!(format_amount(dec("125.500")).unwrap(), "125.50");
    }

    #[test]
    fn test_no_grouping_separator() {
        assert_eq!(format_amount(dec("1234567.89")).unwrap(), "1234567.89");
    }

    #[test]
    fn test_rejects_excess_precision() {
        assert!(matches!(
            format_amount(dec("10.005")),
            Err(EncodeError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_rejects_negative_and_zero() {
        assert!(matches!(
            format_amount(dec("-1.00")),
            Err(EncodeError::InvalidAmount(_))
        ));
        assert!(matches!(
            format_amount(Decimal::ZERO),
            Err(EncodeError::InvalidAmount(_))
        ));
        assert!(matches!(
            format_amount(dec("-0.00")),
            Err(EncodeError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_width_limit() {
        assert_eq!(format_amount(dec("9999999999.99")).unwrap().len(), MAX_AMOUNT_LEN);
        assert!(matches!(
            format_amount(dec("10000000000.00")),
            Err(EncodeError::InvalidAmount(_))
        ));
    }
}
