// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal parsing, shifting and en-US formatting helpers
//!
//! Every string produced here uses plain notation: 18-decimal token amounts
//! never switch to exponent form.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use thousands::Separable;

use crate::config::constants::{FIAT_FRACTION_DIGITS, MAX_DECIMAL_EXPONENT};
use crate::errors::AmountError;
use crate::types::fiat::FiatCurrency;

/// Parse a decimal string, failing instead of coercing bad input to zero
///
/// Surrounding whitespace is ignored. Exponent notation (`"1e18"`) is
/// accepted while the resulting scale stays within
/// [`MAX_DECIMAL_EXPONENT`] in either direction.
///
/// # Errors
///
/// Returns [`AmountError::InvalidNumber`] for empty input, anything the
/// decimal engine rejects (`"abc"`, `"NaN"`, `"1.2.3"`) and out-of-range
/// exponents (`"1e100000000000"`).
///
/// # Examples
///
/// ```
/// use wallet_amount::parse_decimal;
///
/// assert_eq!(parse_decimal("0.1").unwrap().to_string(), "0.1");
/// assert!(parse_decimal("NaN").is_err());
/// assert!(parse_decimal("").is_err());
/// ```
pub fn parse_decimal(input: &str) -> Result<BigDecimal, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::invalid_number(input, "empty string"));
    }

    let value = BigDecimal::from_str(trimmed)
        .map_err(|e| AmountError::invalid_number(input, e.to_string()))?;

    // Rounding to scale 0 materializes 10^|scale|, so the window must be bounded
    let (_, scale) = value.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_DECIMAL_EXPONENT {
        return Err(AmountError::invalid_number(
            input,
            format!("exponent out of range (limit {MAX_DECIMAL_EXPONENT})"),
        ));
    }

    Ok(value)
}

/// Multiply `value` by `10^places` (negative `places` shifts down)
///
/// Exact: only the decimal exponent changes.
pub(crate) fn shift(value: &BigDecimal, places: i64) -> BigDecimal {
    value * &BigDecimal::new(BigInt::from(1u8), -places)
}

/// Plain string with trailing zeros trimmed (`"2000"`, `"0.5"`, `"0"`)
pub(crate) fn plain(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    value.normalized().to_plain_string()
}

/// Plain string with exactly `digits` fractional digits
pub(crate) fn fixed(value: &BigDecimal, digits: u32, mode: RoundingMode) -> String {
    value.with_scale_round(i64::from(digits), mode).to_plain_string()
}

/// Insert en-US thousands separators into the integer part
///
/// ```text
/// "1800.0000" -> "1,800.0000"
/// "-1234567"  -> "-1,234,567"
/// ```
pub(crate) fn group(number: &str) -> String {
    number.separate_with_commas()
}

/// [`fixed`] followed by [`group`]
pub(crate) fn grouped_fixed(value: &BigDecimal, digits: u32, mode: RoundingMode) -> String {
    group(&fixed(value, digits, mode))
}

/// Format a value as en-US currency with narrow symbols
///
/// `fraction_digits` defaults to the currency's minor digits (2 for codes the
/// formatter does not know). Unknown codes render as `"XYZ 1.00"`; alphabetic
/// narrow symbols are separated by a space (`"CHF 10.00"`).
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use wallet_amount::{format_currency, RoundingMode};
///
/// let value = BigDecimal::from_str("1234.567").unwrap();
/// assert_eq!(format_currency("USD", &value, None, RoundingMode::HalfUp), "$1,234.57");
/// assert_eq!(format_currency("JPY", &value, None, RoundingMode::HalfUp), "¥1,235");
/// ```
pub fn format_currency(
    code: &str,
    value: &BigDecimal,
    fraction_digits: Option<u32>,
    mode: RoundingMode,
) -> String {
    let fiat = FiatCurrency::lookup(code);
    let digits = fraction_digits.unwrap_or_else(|| {
        fiat.map_or(FIAT_FRACTION_DIGITS, |f| u32::from(f.minor_digits))
    });

    let rounded = value.with_scale_round(i64::from(digits), mode);
    let sign = if rounded < BigDecimal::zero() { "-" } else { "" };
    let number = group(&rounded.abs().to_plain_string());

    match fiat {
        Some(f) if f.symbol_is_alphabetic() => format!("{sign}{} {number}", f.narrow_symbol),
        Some(f) => format!("{sign}{}{number}", f.narrow_symbol),
        None => format!("{sign}{} {number}", code.to_ascii_uppercase()),
    }
}

/// Remove a literal trailing `".00"`
///
/// Only an exact `.00` suffix is removed: `"£180.10"` is left untouched.
pub fn strip_zero_cents(formatted: &str) -> String {
    formatted
        .strip_suffix(".00")
        .unwrap_or(formatted)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    // ========== parse_decimal tests ==========

    #[test]
    fn parse_decimal_accepts_plain_and_exponent() {
        assert_eq!(parse_decimal("42").unwrap(), dec("42"));
        assert_eq!(parse_decimal(" 0.25 ").unwrap(), dec("0.25"));
        assert_eq!(parse_decimal("1e3").unwrap(), dec("1000"));
        assert_eq!(parse_decimal("-7.5").unwrap(), dec("-7.5"));
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        for input in ["", "   ", "abc", "NaN", "1.2.3", "12abc"] {
            let err = parse_decimal(input).unwrap_err();
            assert!(
                matches!(err, AmountError::InvalidNumber { .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_decimal_bounds_the_exponent() {
        for input in ["1e100000000000", "1e-100000000000", "5e513", "5e-513"] {
            let err = parse_decimal(input).unwrap_err();
            assert!(
                matches!(err, AmountError::InvalidNumber { .. }),
                "{input:?} should be rejected"
            );
        }

        assert_eq!(parse_decimal("1e512").unwrap(), shift(&dec("1"), 512));
        assert!(parse_decimal("1e-512").is_ok());
    }

    // ========== shift tests ==========

    #[test]
    fn shift_up_and_down_is_exact() {
        let wei = dec("361888087406829731");
        let eth = shift(&wei, -18);
        assert_eq!(eth.to_plain_string(), "0.361888087406829731");
        assert_eq!(shift(&eth, 18), wei);
    }

    #[test]
    fn shift_by_zero_is_identity() {
        assert_eq!(shift(&dec("12.5"), 0), dec("12.5"));
    }

    // ========== plain / fixed tests ==========

    #[test]
    fn plain_trims_trailing_zeros() {
        assert_eq!(plain(&dec("2000")), "2000");
        assert_eq!(plain(&dec("2000.000")), "2000");
        assert_eq!(plain(&dec("0.500")), "0.5");
        assert_eq!(plain(&dec("0.000")), "0");
        assert_eq!(plain(&dec("1e20")), "100000000000000000000");
    }

    #[test]
    fn fixed_pads_and_truncates() {
        assert_eq!(fixed(&dec("1"), 4, RoundingMode::Down), "1.0000");
        assert_eq!(fixed(&dec("0.36188"), 4, RoundingMode::Down), "0.3618");
        assert_eq!(fixed(&dec("0.36188"), 4, RoundingMode::HalfUp), "0.3619");
        assert_eq!(fixed(&dec("1.99"), 0, RoundingMode::Down), "1");
    }

    #[test]
    fn grouped_fixed_inserts_separators() {
        assert_eq!(
            grouped_fixed(&dec("1800"), 4, RoundingMode::Down),
            "1,800.0000"
        );
        assert_eq!(
            grouped_fixed(&dec("-1234567.891"), 2, RoundingMode::Down),
            "-1,234,567.89"
        );
        assert_eq!(grouped_fixed(&dec("999"), 0, RoundingMode::Down), "999");
    }

    // ========== format_currency tests ==========

    #[test]
    fn format_currency_uses_narrow_symbols() {
        let v = dec("180");
        assert_eq!(format_currency("GBP", &v, None, RoundingMode::HalfUp), "£180.00");
        assert_eq!(format_currency("EUR", &v, None, RoundingMode::HalfUp), "€180.00");
        assert_eq!(format_currency("CAD", &v, None, RoundingMode::HalfUp), "$180.00");
        assert_eq!(format_currency("BRL", &v, None, RoundingMode::HalfUp), "R$180.00");
    }

    #[test]
    fn format_currency_negative_sign_precedes_symbol() {
        assert_eq!(
            format_currency("USD", &dec("-5"), None, RoundingMode::HalfUp),
            "-$5.00"
        );
    }

    #[test]
    fn format_currency_alphabetic_and_unknown_codes() {
        assert_eq!(
            format_currency("CHF", &dec("10"), None, RoundingMode::HalfUp),
            "CHF 10.00"
        );
        assert_eq!(
            format_currency("xyz", &dec("1"), None, RoundingMode::HalfUp),
            "XYZ 1.00"
        );
    }

    #[test]
    fn format_currency_explicit_digits() {
        assert_eq!(
            format_currency("USD", &dec("1234.5678"), Some(4), RoundingMode::HalfUp),
            "$1,234.5678"
        );
        assert_eq!(
            format_currency("USD", &dec("1234.5"), Some(0), RoundingMode::HalfUp),
            "$1,235"
        );
    }

    #[test]
    fn strip_zero_cents_only_strips_exact_suffix() {
        assert_eq!(strip_zero_cents("£180.00"), "£180");
        assert_eq!(strip_zero_cents("£180.10"), "£180.10");
        assert_eq!(strip_zero_cents("$1,000.001"), "$1,000.001");
        assert_eq!(strip_zero_cents("$0"), "$0");
    }
}
