// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Monetary value object

use std::cmp::Ordering;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};

use crate::config::constants::{
    DEFAULT_FIAT, FIAT_FRACTION_DIGITS, HIDDEN_BALANCE_PLACEHOLDER, NO_FIAT_VALUE,
};
use crate::config::AmountConfig;
use crate::errors::{AmountError, CurrencyError};
use crate::format::{
    format_currency, group, grouped_fixed, parse_decimal, plain, shift, strip_zero_cents,
};
use crate::providers::{FiatRates, UserSettings};
use crate::spans;
use crate::types::currency::Currency;

/// An amount of money in a currency's smallest unit, with a fiat valuation
///
/// The raw amount is stored in subunits (wei for ETH, satoshis for BTC,
/// cents for fiat) as an arbitrary-precision decimal, so 18-decimal token
/// balances never lose precision. The fiat value is a precomputed valuation
/// that is *not* subunit-shifted.
///
/// Amounts are values: arithmetic returns new instances, and display
/// preferences are fixed at construction through [`AmountConfig`].
///
/// # Examples
///
/// ```
/// use wallet_amount::{Amount, Currency};
///
/// let amount = Amount::new("361888087406829731", Currency::eth()).unwrap();
/// assert_eq!(amount.as_value(), "0.361888087406829731");
/// assert_eq!(amount.to_string(), "0.3618 ETH");
///
/// let typed = Amount::from_decimal("1.5", Currency::btc()).unwrap();
/// assert_eq!(typed.as_subunit(), "150000000");
/// ```
#[derive(Debug, Clone)]
pub struct Amount {
    amount: BigDecimal,
    currency: Currency,
    fiat_value: BigDecimal,
    config: AmountConfig,
}

impl Amount {
    /// Create an amount from a raw subunit string with a zero fiat value
    ///
    /// # Errors
    ///
    /// - [`AmountError::InvalidNumber`] if `subunit` is not a number
    /// - [`AmountError::FractionalSubunit`] if `subunit` has a fractional part
    ///
    /// An unrecognized currency is not an error: it is reported through
    /// `tracing` and replaced with [`Currency::default`].
    pub fn new(subunit: &str, currency: Currency) -> Result<Self, AmountError> {
        Self::with_fiat(subunit, currency, "0")
    }

    /// Create an amount from a raw subunit string and a fiat value string
    ///
    /// # Errors
    ///
    /// Same as [`Amount::new`], plus [`AmountError::InvalidNumber`] for a bad
    /// fiat value.
    pub fn with_fiat(subunit: &str, currency: Currency, fiat: &str) -> Result<Self, AmountError> {
        let amount = parse_decimal(subunit)?;
        if amount.with_scale_round(0, RoundingMode::Down) != amount {
            return Err(AmountError::fractional_subunit(subunit));
        }
        let fiat_value = parse_decimal(fiat)?;

        Ok(Self::from_parts(
            amount,
            currency.validated_or_default(),
            fiat_value,
            AmountConfig::default(),
        ))
    }

    /// Create an amount from a human-readable decimal string
    ///
    /// The value is floored to the currency's decimals before being shifted
    /// into subunits, so user input is never rounded up.
    ///
    /// # Examples
    ///
    /// ```
    /// use wallet_amount::{Amount, Currency};
    ///
    /// let usdc = Amount::from_decimal("1.23456789", Currency::usdc()).unwrap();
    /// assert_eq!(usdc.as_subunit(), "1234567");
    /// assert_eq!(usdc.as_value(), "1.234567");
    /// ```
    pub fn from_decimal(decimal: &str, currency: Currency) -> Result<Self, AmountError> {
        Ok(Self::from_decimal_value(&parse_decimal(decimal)?, currency))
    }

    /// [`Amount::from_decimal`] with a fiat value string
    pub fn from_decimal_with_fiat(
        decimal: &str,
        currency: Currency,
        fiat: &str,
    ) -> Result<Self, AmountError> {
        let fiat_value = parse_decimal(fiat)?;
        let mut amount = Self::from_decimal(decimal, currency)?;
        amount.fiat_value = fiat_value;
        Ok(amount)
    }

    /// Create an amount from an already-parsed decimal value
    pub fn from_decimal_value(value: &BigDecimal, currency: Currency) -> Self {
        let currency = currency.validated_or_default();
        let places = i64::from(currency.decimals());
        let floored = value.with_scale_round(places, RoundingMode::Floor);

        Self::from_parts(
            shift(&floored, places),
            currency,
            BigDecimal::zero(),
            AmountConfig::default(),
        )
    }

    fn from_parts(
        amount: BigDecimal,
        currency: Currency,
        fiat_value: BigDecimal,
        config: AmountConfig,
    ) -> Self {
        Self {
            amount,
            currency,
            fiat_value,
            config,
        }
    }

    // ---------------------------------------------------------------------
    // Display preferences
    // ---------------------------------------------------------------------

    /// Replace the display configuration
    pub fn with_config(mut self, config: AmountConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of fractional digits shown by `Display`
    pub fn with_display_decimals(mut self, decimals: u32) -> Self {
        self.config.display_decimals = decimals;
        self
    }

    /// Set the rounding mode used when cutting digits for display
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.config.rounding_mode = mode;
        self
    }

    /// Display configuration
    pub const fn config(&self) -> &AmountConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Currency descriptor
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Fiat valuation (not subunit-shifted)
    pub const fn fiat_value(&self) -> &BigDecimal {
        &self.fiat_value
    }

    /// Raw subunit amount
    pub const fn as_big_decimal(&self) -> &BigDecimal {
        &self.amount
    }

    /// Raw subunit amount as an integer
    ///
    /// A fractional subunit (possible after [`Amount::divided_by`]) is
    /// truncated toward zero.
    pub fn as_bigint(&self) -> BigInt {
        self.amount
            .with_scale_round(0, RoundingMode::Down)
            .into_bigint_and_exponent()
            .0
    }

    /// Raw subunit amount as a plain string, the canonical payload form
    pub fn as_subunit(&self) -> String {
        plain(&self.amount)
    }

    /// Decimal-shifted value cut to the currency's decimals, for form fields
    pub fn as_value(&self) -> String {
        plain(&self.rounded_to(self.decimals()))
    }

    /// Subunit amount shifted down by the currency's decimals, full precision
    pub fn down(&self) -> BigDecimal {
        shift(&self.amount, -self.decimals())
    }

    /// [`Amount::down`] as `f64`
    ///
    /// Lossy: large or high-precision values are rounded to the nearest
    /// double.
    pub fn to_float(&self) -> f64 {
        lossy_f64(&self.down())
    }

    /// `true` only for strictly positive amounts
    ///
    /// Negative amounts are not "non-zero" in the wallet sense.
    pub fn non_zero(&self) -> bool {
        self.amount > BigDecimal::zero()
    }

    /// Whether the subunit amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Whether the subunit amount is below zero
    pub fn is_negative(&self) -> bool {
        self.amount < BigDecimal::zero()
    }

    fn decimals(&self) -> i64 {
        i64::from(self.currency.decimals())
    }

    fn rounded_to(&self, places: i64) -> BigDecimal {
        self.down().with_scale_round(places, self.config.rounding_mode)
    }

    // ---------------------------------------------------------------------
    // Formatting
    // ---------------------------------------------------------------------

    /// Grouped decimal value with exactly `decimals` fractional digits
    ///
    /// # Examples
    ///
    /// ```
    /// use wallet_amount::{Amount, Currency};
    ///
    /// let amount = Amount::from_decimal("1234.56789", Currency::eth()).unwrap();
    /// assert_eq!(amount.local_amount(2), "1,234.56");
    /// assert_eq!(amount.local_amount(6), "1,234.567890");
    /// ```
    pub fn local_amount(&self, decimals: u32) -> String {
        grouped_fixed(&self.down(), decimals, self.config.rounding_mode)
    }

    /// Grouped whole units, optionally followed by the symbol
    pub fn integer_local_amount(&self, include_currency: bool) -> String {
        let value = self.local_amount(0);
        if include_currency {
            format!("{value} {}", self.currency.symbol())
        } else {
            value
        }
    }

    /// Grouped value at the currency's native precision, with the currency
    pub fn as_decimal_format(&self) -> String {
        format!(
            "{} {}",
            self.local_amount(u32::from(self.currency.decimals())),
            self.currency
        )
    }

    /// Full-precision value for detail views
    ///
    /// Fiat currencies go through the locale currency formatter with a
    /// trailing `.00` removed; everything else shows every significant digit
    /// followed by the symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use wallet_amount::{Amount, Currency};
    ///
    /// let gbp = Currency::fiat("GBP").unwrap();
    /// assert_eq!(Amount::from_decimal("180.00", gbp.clone()).unwrap().full_local_amount(), "£180");
    /// assert_eq!(Amount::from_decimal("180.10", gbp).unwrap().full_local_amount(), "£180.10");
    ///
    /// let eth = Amount::new("1234500000000000000001", Currency::eth()).unwrap();
    /// assert_eq!(eth.full_local_amount(), "1,234.500000000000000001 ETH");
    /// ```
    pub fn full_local_amount(&self) -> String {
        let down = self.down();
        match self.currency.as_fiat_currency() {
            Some(fiat) => strip_zero_cents(&format_currency(
                fiat.code,
                &down,
                None,
                self.config.rounding_mode,
            )),
            None => format!("{} {}", group(&plain(&down)), self.currency.symbol()),
        }
    }

    /// Format the fiat value as USD
    ///
    /// Rounds half-up like the locale formatter. With `remove_decimals`, a
    /// trailing `.00` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use wallet_amount::{Amount, Currency};
    ///
    /// let amount = Amount::with_fiat("1", Currency::eth(), "1234.5").unwrap();
    /// assert_eq!(amount.as_usd(2, false), "$1,234.50");
    ///
    /// let whole = Amount::with_fiat("1", Currency::eth(), "100").unwrap();
    /// assert_eq!(whole.as_usd(2, true), "$100");
    /// ```
    pub fn as_usd(&self, decimals: u32, remove_decimals: bool) -> String {
        let formatted = format_currency(
            DEFAULT_FIAT,
            &self.fiat_value,
            Some(decimals),
            RoundingMode::HalfUp,
        );
        if remove_decimals {
            strip_zero_cents(&formatted)
        } else {
            formatted
        }
    }

    /// Format the fiat value in the user's preferred fiat currency
    ///
    /// - hidden balances render [`HIDDEN_BALANCE_PLACEHOLDER`]
    /// - currencies excluded from fiat conversion render [`NO_FIAT_VALUE`]
    /// - `USD` delegates to [`Amount::as_usd`]
    /// - other codes multiply by the rate from `rates`; a missing rate is
    ///   logged and the USD rendering is used instead
    pub fn as_fiat(
        &self,
        settings: &dyn UserSettings,
        rates: &dyn FiatRates,
        remove_decimals: bool,
    ) -> String {
        if !settings.show_balances() {
            return HIDDEN_BALANCE_PLACEHOLDER.to_string();
        }
        if self.currency.is_fiat_excluded() {
            return NO_FIAT_VALUE.to_string();
        }

        let target = settings.preferred_fiat();
        if target.eq_ignore_ascii_case(DEFAULT_FIAT) {
            return self.as_usd(FIAT_FRACTION_DIGITS, remove_decimals);
        }

        let span = spans::convert_to_fiat(self.currency.symbol(), target);
        let _guard = span.enter();

        let Some(rate) = rates.rate(target) else {
            tracing::warn!(
                target_fiat = %target,
                "No conversion rate available, showing USD value"
            );
            return self.as_usd(FIAT_FRACTION_DIGITS, remove_decimals);
        };

        let converted = &self.fiat_value * &rate;
        tracing::debug!(rate = %rate, converted = %converted, "Converted fiat value");

        let formatted = format_currency(target, &converted, None, RoundingMode::HalfUp);
        if remove_decimals {
            strip_zero_cents(&formatted)
        } else {
            formatted
        }
    }

    /// Fiat value rounded to cents, as `f64`
    pub fn as_fiat_float(&self) -> f64 {
        lossy_f64(
            &self
                .fiat_value
                .with_scale_round(i64::from(FIAT_FRACTION_DIGITS), RoundingMode::HalfUp),
        )
    }

    /// Render with `render`, or the placeholder when balances are hidden
    ///
    /// # Examples
    ///
    /// ```
    /// use wallet_amount::{Amount, Currency, StaticSettings, HIDDEN_BALANCE_PLACEHOLDER};
    ///
    /// let amount = Amount::from_decimal("2", Currency::eth()).unwrap();
    /// let visible = StaticSettings::default();
    /// let hidden = StaticSettings::default().with_hidden_balances();
    ///
    /// assert_eq!(amount.masked(&visible, |a| a.to_string()), "2.0000 ETH");
    /// assert_eq!(amount.masked(&hidden, |a| a.to_string()), HIDDEN_BALANCE_PLACEHOLDER);
    /// ```
    pub fn masked<F>(&self, settings: &dyn UserSettings, render: F) -> String
    where
        F: FnOnce(&Self) -> String,
    {
        if settings.show_balances() {
            render(self)
        } else {
            HIDDEN_BALANCE_PLACEHOLDER.to_string()
        }
    }

    // ---------------------------------------------------------------------
    // Comparisons
    // ---------------------------------------------------------------------

    /// Whether the decimal-shifted value is below `decimal`
    ///
    /// # Errors
    ///
    /// [`AmountError::InvalidNumber`] if `decimal` cannot be parsed.
    pub fn is_less_than_value(&self, decimal: &str) -> Result<bool, AmountError> {
        Ok(self.compare_value(decimal)? == Ordering::Less)
    }

    /// Whether the decimal-shifted value is above `decimal`
    ///
    /// # Errors
    ///
    /// [`AmountError::InvalidNumber`] if `decimal` cannot be parsed.
    pub fn is_more_than_value(&self, decimal: &str) -> Result<bool, AmountError> {
        Ok(self.compare_value(decimal)? == Ordering::Greater)
    }

    fn compare_value(&self, decimal: &str) -> Result<Ordering, AmountError> {
        let other = parse_decimal(decimal)?;
        Ok(self.down().cmp(&other))
    }

    /// Exact symbol match
    pub fn is_currency(&self, symbol: &str) -> bool {
        self.currency.symbol() == symbol
    }

    // ---------------------------------------------------------------------
    // Arithmetic
    // ---------------------------------------------------------------------

    /// Scale both the subunit amount and the fiat value by `factor`
    pub fn multiplied_by(&self, factor: &BigDecimal) -> Self {
        Self::from_parts(
            &self.amount * factor,
            self.currency.clone(),
            &self.fiat_value * factor,
            self.config,
        )
    }

    /// Divide both the subunit amount and the fiat value by `divisor`
    ///
    /// The subunit result keeps full precision, so
    /// `a.multiplied_by(k).divided_by(k)` equals `a`.
    ///
    /// # Errors
    ///
    /// [`AmountError::DivisionByZero`] for a zero divisor.
    pub fn divided_by(&self, divisor: &BigDecimal) -> Result<Self, AmountError> {
        if divisor.is_zero() {
            return Err(AmountError::DivisionByZero);
        }

        Ok(Self::from_parts(
            &self.amount / divisor,
            self.currency.clone(),
            &self.fiat_value / divisor,
            self.config,
        ))
    }

    /// Sum subunit amounts and fiat values component-wise
    ///
    /// # Errors
    ///
    /// With [`AmountConfig::strict_currency_match`] (the default), amounts
    /// with different symbols fail with [`CurrencyError::Mismatch`]. When it
    /// is off the mismatch is logged and the sum is returned in the
    /// receiver's currency.
    pub fn merge_amount(&self, other: &Amount) -> Result<Self, AmountError> {
        let span = spans::merge_amount(self.currency.symbol(), other.currency.symbol());
        let _guard = span.enter();

        if self.currency.symbol() != other.currency.symbol() {
            if self.config.strict_currency_match {
                return Err(
                    CurrencyError::mismatch(self.currency.symbol(), other.currency.symbol())
                        .into(),
                );
            }
            tracing::warn!(
                symbol = %self.currency,
                other_symbol = %other.currency,
                "Merging amounts in different currencies"
            );
        }

        Ok(Self::from_parts(
            &self.amount + &other.amount,
            self.currency.clone(),
            &self.fiat_value + &other.fiat_value,
            self.config,
        ))
    }

    /// `amount * fraction` in decimal units, cut to the currency's decimals
    ///
    /// # Examples
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use std::str::FromStr;
    /// use wallet_amount::{Amount, Currency};
    ///
    /// let amount = Amount::from_decimal("2000", Currency::eth()).unwrap();
    /// let tenth = BigDecimal::from_str("0.1").unwrap();
    /// assert_eq!(amount.multiply_percentage(&tenth), "200");
    /// ```
    pub fn multiply_percentage(&self, fraction: &BigDecimal) -> String {
        plain(&self.percentage_value(fraction))
    }

    fn percentage_value(&self, fraction: &BigDecimal) -> BigDecimal {
        shift(&(&self.amount * fraction), -self.decimals())
            .with_scale_round(self.decimals(), self.config.rounding_mode)
    }

    /// Amount of `fraction` taken as a fee, or what remains after it
    ///
    /// With `remainder`, the result is `1 - fraction` of the amount. The fee
    /// is rebuilt from its decimal value, so the result has a zero fiat
    /// value. Display configuration is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use std::str::FromStr;
    /// use wallet_amount::{Amount, Currency};
    ///
    /// let amount = Amount::from_decimal("2000", Currency::eth()).unwrap();
    /// let tenth = BigDecimal::from_str("0.1").unwrap();
    /// assert_eq!(amount.take_fee(&tenth, false).to_string(), "200.0000 ETH");
    /// assert_eq!(amount.take_fee(&tenth, true).to_string(), "1,800.0000 ETH");
    /// ```
    pub fn take_fee(&self, fraction: &BigDecimal, remainder: bool) -> Self {
        let fee = if remainder {
            BigDecimal::from(1) - fraction
        } else {
            fraction.clone()
        };

        Self::from_decimal_value(&self.percentage_value(&fee), self.currency.clone())
            .with_config(self.config)
    }

    /// Set the fiat value to `down() * rate`; no-op for a zero amount
    pub fn set_usd_value_from_rate(&mut self, rate: &BigDecimal) -> &mut Self {
        if !self.is_zero() {
            self.fiat_value = self.down() * rate;
        }
        self
    }
}

fn lossy_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        tracing::warn!(value = %value, "Failed to convert decimal to f64, using 0.0");
        0.0
    })
}

/// Equal when subunit amounts match numerically and symbols match exactly
///
/// Fiat values and display configuration do not take part.
impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency.symbol() == other.currency.symbol()
    }
}

impl Eq for Amount {}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.currency.as_fiat_currency() {
            Some(fiat) => f.write_str(&format_currency(
                fiat.code,
                &self.down(),
                None,
                self.config.rounding_mode,
            )),
            None => write!(
                f,
                "{} {}",
                self.local_amount(self.config.display_decimals),
                self.currency.symbol()
            ),
        }
    }
}
