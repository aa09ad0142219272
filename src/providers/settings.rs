// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! User display settings

use crate::config::constants::DEFAULT_FIAT;

/// User preferences that change how balances are rendered
///
/// # Required Methods
///
/// - [`preferred_fiat`](UserSettings::preferred_fiat): ISO code fiat values
///   are shown in
///
/// # Optional Methods
///
/// - [`show_balances`](UserSettings::show_balances): default `true`
pub trait UserSettings: Send + Sync {
    /// ISO code of the fiat currency the user wants to see (e.g. `"USD"`)
    fn preferred_fiat(&self) -> &str;

    /// When `false`, every formatted balance is replaced by
    /// [`HIDDEN_BALANCE_PLACEHOLDER`](crate::HIDDEN_BALANCE_PLACEHOLDER)
    fn show_balances(&self) -> bool {
        true
    }
}

/// Fixed settings held in memory
///
/// # Examples
///
/// ```
/// use wallet_amount::{StaticSettings, UserSettings};
///
/// let settings = StaticSettings::default();
/// assert_eq!(settings.preferred_fiat(), "USD");
/// assert!(settings.show_balances());
///
/// let hidden = StaticSettings::default().with_hidden_balances();
/// assert!(!hidden.show_balances());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSettings {
    preferred_fiat: String,
    show_balances: bool,
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self {
            preferred_fiat: DEFAULT_FIAT.to_string(),
            show_balances: true,
        }
    }
}

impl StaticSettings {
    /// Show fiat values in `code` (stored upper-cased)
    pub fn with_preferred_fiat(mut self, code: impl Into<String>) -> Self {
        self.preferred_fiat = code.into().to_ascii_uppercase();
        self
    }

    /// Hide all balances
    pub fn with_hidden_balances(mut self) -> Self {
        self.show_balances = false;
        self
    }

    /// Set balance visibility explicitly
    pub fn with_show_balances(mut self, show: bool) -> Self {
        self.show_balances = show;
        self
    }
}

impl UserSettings for StaticSettings {
    fn preferred_fiat(&self) -> &str {
        &self.preferred_fiat
    }

    fn show_balances(&self) -> bool {
        self.show_balances
    }
}
