// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display configuration for amounts
//!
//! An [`AmountConfig`] travels with every [`Amount`](crate::Amount) and only
//! affects how it is rendered and combined, never the stored value.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use wallet_amount::AmountConfig;
//!
//! // 4 display decimals, truncating, strict currency matching
//! let config = AmountConfig::default();
//! assert_eq!(config.display_decimals, 4);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use wallet_amount::{AmountConfigBuilder, RoundingMode};
//!
//! let config = AmountConfigBuilder::new()
//!     .display_decimals(2)
//!     .rounding_mode(RoundingMode::HalfUp)
//!     .build();
//! ```

use bigdecimal::RoundingMode;

pub mod constants;

use constants::DEFAULT_DISPLAY_DECIMALS;

/// Display preferences for an [`Amount`](crate::Amount)
///
/// Use [`AmountConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountConfig {
    /// Fractional digits shown by `Display` for non-fiat currencies
    /// Default: 4
    pub display_decimals: u32,

    /// Rounding applied when a value is cut to a fixed number of digits
    /// Default: `RoundingMode::Down` (truncate toward zero)
    pub rounding_mode: RoundingMode,

    /// Reject `merge_amount` across different currency symbols
    /// Default: true
    pub strict_currency_match: bool,
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self::wallet_defaults()
    }
}

impl AmountConfig {
    /// Wallet display defaults: 4 decimals, truncating, strict merging
    pub fn wallet_defaults() -> Self {
        Self {
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            rounding_mode: RoundingMode::Down,
            strict_currency_match: true,
        }
    }

    /// Lenient config that logs currency mismatches instead of failing
    ///
    /// # Example
    ///
    /// ```rust
    /// use wallet_amount::AmountConfig;
    ///
    /// let config = AmountConfig::lenient();
    /// assert!(!config.strict_currency_match);
    /// ```
    pub fn lenient() -> Self {
        Self {
            strict_currency_match: false,
            ..Self::wallet_defaults()
        }
    }
}

/// Builder for [`AmountConfig`]
///
/// # Example
///
/// ```rust
/// use wallet_amount::{AmountConfigBuilder, RoundingMode};
///
/// let config = AmountConfigBuilder::new()
///     .display_decimals(6)
///     .rounding_mode(RoundingMode::HalfEven)
///     .strict_currency_match(false)
///     .build();
/// assert_eq!(config.display_decimals, 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AmountConfigBuilder {
    config: AmountConfig,
}

impl AmountConfigBuilder {
    /// Create a new builder starting from [`AmountConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: AmountConfig) -> Self {
        Self { config }
    }

    /// Set the number of fractional digits shown by `Display`
    pub fn display_decimals(mut self, decimals: u32) -> Self {
        self.config.display_decimals = decimals;
        self
    }

    /// Set the rounding mode used for display
    pub fn rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.config.rounding_mode = mode;
        self
    }

    /// Enable or disable the fail-fast currency check in `merge_amount`
    pub fn strict_currency_match(mut self, strict: bool) -> Self {
        self.config.strict_currency_match = strict;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AmountConfig {
        self.config
    }
}
