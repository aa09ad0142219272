// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ISO 4217 fiat currencies known to the en-US formatter

/// A fiat currency as rendered by the en-US locale with narrow symbols
///
/// # Examples
///
/// ```
/// use wallet_amount::FiatCurrency;
///
/// let gbp = FiatCurrency::lookup("GBP").unwrap();
/// assert_eq!(gbp.narrow_symbol, "£");
/// assert_eq!(gbp.minor_digits, 2);
///
/// assert!(FiatCurrency::lookup("ETH").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatCurrency {
    /// ISO 4217 code
    pub code: &'static str,
    /// Narrow symbol (`$`, not `US$`)
    pub narrow_symbol: &'static str,
    /// Fractional digits used by the locale
    pub minor_digits: u8,
}

const fn fiat(code: &'static str, narrow_symbol: &'static str, minor_digits: u8) -> FiatCurrency {
    FiatCurrency {
        code,
        narrow_symbol,
        minor_digits,
    }
}

static FIAT_CURRENCIES: &[FiatCurrency] = &[
    fiat("USD", "$", 2),
    fiat("EUR", "€", 2),
    fiat("GBP", "£", 2),
    fiat("JPY", "¥", 0),
    fiat("CNY", "¥", 2),
    fiat("KRW", "₩", 0),
    fiat("INR", "₹", 2),
    fiat("CAD", "$", 2),
    fiat("AUD", "$", 2),
    fiat("NZD", "$", 2),
    fiat("HKD", "$", 2),
    fiat("SGD", "$", 2),
    fiat("MXN", "$", 2),
    fiat("ARS", "$", 2),
    fiat("BRL", "R$", 2),
    fiat("RUB", "₽", 2),
    fiat("TRY", "₺", 2),
    fiat("NGN", "₦", 2),
    fiat("PHP", "₱", 2),
    fiat("VND", "₫", 0),
    fiat("UAH", "₴", 2),
    fiat("ILS", "₪", 2),
    fiat("THB", "฿", 2),
    fiat("PLN", "zł", 2),
    fiat("ZAR", "R", 2),
    fiat("CHF", "CHF", 2),
    fiat("SEK", "kr", 2),
    fiat("NOK", "kr", 2),
    fiat("DKK", "kr", 2),
];

impl FiatCurrency {
    /// Find a fiat currency by ISO code (case-insensitive)
    pub fn lookup(code: &str) -> Option<&'static FiatCurrency> {
        FIAT_CURRENCIES
            .iter()
            .find(|fiat| fiat.code.eq_ignore_ascii_case(code))
    }

    /// Check whether `code` is a recognized ISO fiat code
    pub fn is_fiat_code(code: &str) -> bool {
        Self::lookup(code).is_some()
    }

    /// Every fiat currency the formatter knows about
    pub fn all() -> &'static [FiatCurrency] {
        FIAT_CURRENCIES
    }

    /// Whether the narrow symbol is a word that needs a separating space
    pub(crate) fn symbol_is_alphabetic(&self) -> bool {
        self.narrow_symbol.chars().all(char::is_alphabetic)
    }
}
