//! Bounded value objects carried by every quantum object.

use serde::{Deserialize, Serialize};

use qvault_core::{DomainError, DomainResult, ValueObject};

/// Remaining structural integrity, always within `[MIN, MAX]`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stability(f64);

impl ValueObject for Stability {}

impl Stability {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub const ZERO: Stability = Stability(Self::MIN);

    /// Clamp `value` into range. Non-finite input is rejected.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!("stability must be finite, got {value}")));
        }
        Ok(Self::clamped(value))
    }

    fn clamped(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn depleted(self, amount: f64) -> Self {
        Self::clamped(self.0 - amount)
    }

    pub fn restored(self, amount: f64) -> Self {
        Self::clamped(self.0 + amount)
    }

    /// True once nothing is left (the collapse floor).
    pub fn is_exhausted(self) -> bool {
        self.0 <= Self::MIN
    }
}

impl core::fmt::Display for Stability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Cosmetic danger rating in `1..=10`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DangerLevel(u8);

impl ValueObject for DangerLevel {}

impl DangerLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> DomainResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(DomainError::validation(format!(
                "danger level must be within {}..={}, got {level}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
