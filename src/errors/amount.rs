// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for amount construction and arithmetic.

use super::CurrencyError;

/// Errors that can occur when building or combining [`Amount`](crate::Amount)s.
///
/// Numeric input is never coerced: a string the decimal engine cannot parse
/// is always surfaced as [`AmountError::InvalidNumber`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// A string could not be parsed as a decimal number.
    #[error("Invalid number {input:?}: {details}")]
    InvalidNumber {
        /// The rejected input
        input: String,
        /// Parser message
        details: String,
    },

    /// A subunit string carried a non-zero fractional part.
    ///
    /// Subunits are the smallest indivisible unit of a currency, so
    /// `"1.5"` wei is not a valid raw amount.
    #[error("Subunit amount must be an integer, got {input:?}")]
    FractionalSubunit {
        /// The rejected input
        input: String,
    },

    /// Division by a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Currency validation or matching failed.
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),
}

impl AmountError {
    /// Create an `InvalidNumber` error.
    pub fn invalid_number(input: impl Into<String>, details: impl Into<String>) -> Self {
        AmountError::InvalidNumber {
            input: input.into(),
            details: details.into(),
        }
    }

    /// Create a `FractionalSubunit` error.
    pub fn fractional_subunit(input: impl Into<String>) -> Self {
        AmountError::FractionalSubunit {
            input: input.into(),
        }
    }
}
