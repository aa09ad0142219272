// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency descriptor type

use serde::{Deserialize, Serialize};

use crate::config::constants::currencies::{
    BTC_DECIMALS, BTC_SYMBOL, ETH_DECIMALS, ETH_SYMBOL, USDC_DECIMALS, USDC_SYMBOL,
};
use crate::errors::CurrencyError;

use super::fiat::FiatCurrency;

/// Describes the currency an [`Amount`](crate::Amount) is denominated in
///
/// `decimals` is the number of places between the subunit and the
/// human-readable unit: 18 for ETH (wei), 8 for BTC (satoshis), 2 for most
/// fiat currencies (cents).
///
/// A currency whose symbol is an ISO fiat code (see [`FiatCurrency`]) is
/// rendered through the locale currency formatter instead of with a
/// trailing symbol.
///
/// # Examples
///
/// ```
/// use wallet_amount::Currency;
///
/// let eth = Currency::eth();
/// assert_eq!(eth.decimals(), 18);
/// assert!(!eth.is_fiat());
///
/// let gbp = Currency::fiat("GBP").unwrap();
/// assert_eq!(gbp.decimals(), 2);
/// assert!(gbp.is_fiat());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    symbol: String,
    decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    fiat_excluded: bool,
}

impl Currency {
    /// Largest accepted decimal count (digits of `2^256 - 1`, minus one)
    pub const MAX_DECIMALS: u8 = 77;

    /// Longest accepted ticker symbol
    pub const MAX_SYMBOL_LEN: usize = 32;

    /// Create a new currency descriptor
    ///
    /// No validation happens here; [`Amount`](crate::Amount) construction
    /// validates and reports bad descriptors.
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            name: None,
            fiat_excluded: false,
        }
    }

    /// Ether, 18 decimals
    pub fn eth() -> Self {
        Self::new(ETH_SYMBOL, ETH_DECIMALS).with_name("Ether")
    }

    /// Bitcoin, 8 decimals
    pub fn btc() -> Self {
        Self::new(BTC_SYMBOL, BTC_DECIMALS).with_name("Bitcoin")
    }

    /// USD Coin, 6 decimals
    pub fn usdc() -> Self {
        Self::new(USDC_SYMBOL, USDC_DECIMALS).with_name("USD Coin")
    }

    /// Fiat currency by ISO code, using the locale's minor digits
    ///
    /// Returns `None` for codes the formatter does not know.
    pub fn fiat(code: &str) -> Option<Self> {
        FiatCurrency::lookup(code).map(|fiat| Self::new(fiat.code, fiat.minor_digits))
    }

    /// Attach a human-readable name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Exclude this currency from fiat conversion
    ///
    /// `Amount::as_fiat` renders [`NO_FIAT_VALUE`](crate::NO_FIAT_VALUE) for
    /// such currencies (testnet tokens, unpriced assets).
    pub fn without_fiat_value(mut self) -> Self {
        self.fiat_excluded = true;
        self
    }

    /// Ticker symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Decimal places between subunit and unit
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Optional human-readable name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether `as_fiat` is disabled for this currency
    pub const fn is_fiat_excluded(&self) -> bool {
        self.fiat_excluded
    }

    /// Whether the symbol is a recognized ISO fiat code
    pub fn is_fiat(&self) -> bool {
        FiatCurrency::is_fiat_code(&self.symbol)
    }

    /// Locale data for fiat currencies
    pub fn as_fiat_currency(&self) -> Option<&'static FiatCurrency> {
        FiatCurrency::lookup(&self.symbol)
    }

    /// Check that the descriptor is usable
    ///
    /// # Errors
    ///
    /// - [`CurrencyError::EmptySymbol`] for an empty symbol
    /// - [`CurrencyError::InvalidSymbol`] for symbols with whitespace or
    ///   control characters, or longer than [`Self::MAX_SYMBOL_LEN`]
    /// - [`CurrencyError::TooManyDecimals`] above [`Self::MAX_DECIMALS`]
    pub fn validate(&self) -> Result<(), CurrencyError> {
        if self.symbol.is_empty() {
            return Err(CurrencyError::EmptySymbol);
        }

        if self.symbol.chars().count() > Self::MAX_SYMBOL_LEN
            || self
                .symbol
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(CurrencyError::invalid_symbol(&self.symbol));
        }

        if self.decimals > Self::MAX_DECIMALS {
            return Err(CurrencyError::TooManyDecimals {
                symbol: self.symbol.clone(),
                decimals: self.decimals,
                max: Self::MAX_DECIMALS,
            });
        }

        Ok(())
    }

    /// Return `self` if valid, otherwise report and use the default currency
    pub(crate) fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                let fallback = Self::default();
                tracing::error!(
                    symbol = %self.symbol,
                    decimals = self.decimals,
                    fallback = %fallback.symbol,
                    error = %e,
                    "Unrecognized currency, falling back to default"
                );
                fallback
            }
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::eth()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}
