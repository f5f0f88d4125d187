use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format amount with the currency's number of decimal places and proper
/// thousands separators, without currency symbol.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: Decimal, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let rounded = amount.round_dp(decimal_places);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    // Every Decimal integer part fits in a u128.
    let integer_part = abs
        .trunc()
        .to_u128()
        .map(|i| i.to_formatted_string(&Locale::en))
        .unwrap_or_else(|| abs.trunc().to_string());
    if decimal_places == 0 {
        return format!("{}{}", sign, integer_part);
    }
    let fractional_part = (abs.fract() * Decimal::from(10u64.pow(decimal_places))).trunc();
    format!(
        "{}{}.{:0>width$}",
        sign,
        integer_part,
        fractional_part.to_string(),
        width = decimal_places as usize
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(1234.5), Currency::EUR), "1,234.50");
        assert_eq!(format_amount(dec!(-0.456), Currency::USD), "-0.46");
        assert_eq!(format_amount(dec!(-0.001), Currency::USD), "0.00");
        assert_eq!(format_amount(dec!(1234567.4), Currency::JPY), "1,234,567");
        assert_eq!(format_amount(dec!(0), Currency::EUR), "0.00");
    }

    #[test]
    fn test_format_amount_beyond_i64() {
        assert_eq!(
            format_amount(dec!(12345678901234567890.126), Currency::EUR),
            "12,345,678,901,234,567,890.13"
        );
        assert_eq!(
            format_amount(Decimal::MAX, Currency::USD),
            "79,228,162,514,264,337,593,543,950,335.00"
        );
        assert_eq!(
            format_amount(Decimal::MIN, Currency::JPY),
            "-79,228,162,514,264,337,593,543,950,335"
        );
    }
}
