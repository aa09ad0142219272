// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known symbols and display constants
//!
//! This module centralizes the magic strings and numbers used by the
//! formatting paths so tests and callers can refer to them by name.

/// The only supported formatting locale
pub const LOCALE: &str = "en-US";

/// Fractional digits shown by `Amount`'s `Display` for non-fiat currencies
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 4;

/// Fiat code used when the user has not chosen one
pub const DEFAULT_FIAT: &str = "USD";

/// Fractional digits used for fiat values
pub const FIAT_FRACTION_DIGITS: u32 = 2;

/// Largest decimal exponent accepted when parsing, in either direction
pub const MAX_DECIMAL_EXPONENT: u64 = 512;

/// Rendered instead of any balance while balances are hidden
pub const HIDDEN_BALANCE_PLACEHOLDER: &str = "*****";

/// Rendered by `as_fiat` for currencies excluded from fiat conversion
pub const NO_FIAT_VALUE: &str = "-";

/// Well-known crypto currency symbols and decimals
pub mod currencies {
    /// Ether
    pub const ETH_SYMBOL: &str = "ETH";
    /// Ether decimals (wei)
    pub const ETH_DECIMALS: u8 = 18;

    /// Bitcoin
    pub const BTC_SYMBOL: &str = "BTC";
    /// Bitcoin decimals (satoshis)
    pub const BTC_DECIMALS: u8 = 8;

    /// USD Coin
    pub const USDC_SYMBOL: &str = "USDC";
    /// USD Coin decimals
    pub const USDC_DECIMALS: u8 = 6;
}
