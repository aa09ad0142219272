// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for currency descriptors.

/// Errors raised while validating or combining currencies.
///
/// Validation errors are normally reported and absorbed by
/// [`Amount`](crate::Amount) construction, which falls back to the default
/// currency. [`CurrencyError::Mismatch`] is returned to the caller by
/// [`Amount::merge_amount`](crate::Amount::merge_amount) when strict currency
/// matching is enabled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    /// The currency symbol is empty.
    #[error("Currency symbol is empty")]
    EmptySymbol,

    /// The currency symbol contains whitespace, control characters, or is
    /// too long to be a ticker.
    #[error("Invalid currency symbol: {symbol:?}")]
    InvalidSymbol {
        /// The offending symbol
        symbol: String,
    },

    /// The currency declares more decimals than a 256-bit integer can hold.
    #[error("Currency {symbol} declares {decimals} decimals (max {max})")]
    TooManyDecimals {
        /// Currency symbol
        symbol: String,
        /// Declared decimal count
        decimals: u8,
        /// Largest accepted decimal count
        max: u8,
    },

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    Mismatch {
        /// Symbol of the receiving amount
        expected: String,
        /// Symbol of the other amount
        found: String,
    },
}

impl CurrencyError {
    /// Create an `InvalidSymbol` error.
    pub fn invalid_symbol(symbol: impl Into<String>) -> Self {
        CurrencyError::InvalidSymbol {
            symbol: symbol.into(),
        }
    }

    /// Create a `Mismatch` error.
    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        CurrencyError::Mismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
