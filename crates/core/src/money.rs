//! Prices in minor currency units.
//!
//! Listings store and compare prices in cents. Major units (dollars) only
//! appear at the edges: parsing user input and rendering badges.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

const MINOR_PER_MAJOR: u64 = 100;

/// An amount in the smallest currency unit (e.g. cents). Zero means free.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Whole major units, saturating on overflow.
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(MINOR_PER_MAJOR))
    }

    pub fn minor(&self) -> u64 {
        self.0
    }

    pub fn is_free(&self) -> bool {
        self.0 == 0
    }

    /// Parse a decimal major-unit string such as `"29.99"` into minor units,
    /// rounding to the nearest cent.
    pub fn parse_major(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::validation(format!("price '{trimmed}' is not a number")))?;

        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }

        let minor = (value * MINOR_PER_MAJOR as f64).round();
        if minor > u64::MAX as f64 {
            return Err(DomainError::validation("price is too large"));
        }
        Ok(Self(minor as u64))
    }

    pub fn saturating_mul(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Render for a price badge: `"Free"` for zero, otherwise USD with
    /// thousands separators and cents only when non-zero (`$29`, `$1,250.50`).
    pub fn display_whole(&self) -> String {
        if self.is_free() {
            return "Free".to_string();
        }
        self.display_dollars()
    }

    /// USD rendering without the free special case (`$0`, `$29`, `$19.99`).
    pub fn display_dollars(&self) -> String {
        let major = self.0 / MINOR_PER_MAJOR;
        let cents = self.0 % MINOR_PER_MAJOR;
        let grouped = group_thousands(major);
        if cents == 0 {
            format!("${grouped}")
        } else {
            format!("${grouped}.{cents:02}")
        }
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display_dollars())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
