// Copyright 2025 Cowboy AI, LLC.

//! Physical quantities with a unit and an error margin, and their certified
//! counterpart tracking which share of the quantity is certified.
//!
//! Equality is tolerance based: two amounts are equal when their values are
//! within [`VALUE_TOLERANCE`] and their error margins within
//! [`MARGIN_TOLERANCE`]. Certification score and weight compare within
//! [`CERTIFICATION_TOLERANCE`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{MonoidError, MonoidResult};
use crate::monoid::Monoid;

/// Maximum absolute difference between two equal amount values.
pub const VALUE_TOLERANCE: f64 = 0.01;

/// Maximum absolute difference between two equal error margins.
pub const MARGIN_TOLERANCE: f64 = 0.1;

/// Maximum absolute difference between two equal scores or weights.
pub const CERTIFICATION_TOLERANCE: f64 = 0.01;

fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

fn ensure_finite(name: &str, value: f64) -> MonoidResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MonoidError::invalid(format!("{name} must be finite, got {value}")))
    }
}

/// An amount of a physical quantity, with its unit and margin of error.
///
/// The identity is the zero without a unit, which adopts the unit of the
/// amount it is appended to. Any other amount keeps its unit, and a non-zero
/// amount without a unit is invalid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Amount {
    value: f64,
    unit: String,
    error_margin: f64,
}

impl Amount {
    /// Create an amount.
    pub fn new(value: f64, unit: impl Into<String>, error_margin: f64) -> Self {
        Self {
            value,
            unit: unit.into(),
            error_margin,
        }
    }

    /// Zero of the given unit.
    pub fn neutral(unit: impl Into<String>) -> Self {
        Self::new(0.0, unit, 0.0)
    }

    /// Measured value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit symbol, empty for a dimensionless amount.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Absolute margin of error.
    pub fn error_margin(&self) -> f64 {
        self.error_margin
    }

    /// Check that value and margin are finite numbers, and that only the
    /// zero amount omits its unit.
    pub fn validate(&self) -> MonoidResult<()> {
        ensure_finite("amount value", self.value)?;
        ensure_finite("amount error margin", self.error_margin)?;
        if self.unit.is_empty() && !self.is_unitless_zero() {
            return Err(MonoidError::invalid(format!("amount {self} has no unit")));
        }
        Ok(())
    }

    /// Sum of two amounts of the same unit. Margins add up.
    pub fn add(&self, other: &Amount) -> MonoidResult<Amount> {
        let unit = self.merged_unit(other)?;
        Ok(Amount {
            value: self.value + other.value,
            unit,
            error_margin: self.error_margin + other.error_margin,
        })
    }

    /// `self + coefficient * other`.
    pub fn add_weighted(&self, coefficient: f64, other: &Amount) -> MonoidResult<Amount> {
        self.add(&other.scale(coefficient))
    }

    /// Multiply value and margin by `coefficient`.
    pub fn scale(&self, coefficient: f64) -> Amount {
        Amount {
            value: coefficient * self.value,
            unit: self.unit.clone(),
            error_margin: coefficient * self.error_margin,
        }
    }

    fn is_unitless_zero(&self) -> bool {
        self.unit.is_empty() && self.value == 0.0 && self.error_margin == 0.0
    }

    fn merged_unit(&self, other: &Amount) -> MonoidResult<String> {
        if self.unit == other.unit || other.is_unitless_zero() {
            Ok(self.unit.clone())
        } else if self.is_unitless_zero() {
            Ok(other.unit.clone())
        } else {
            Err(MonoidError::UnitMismatch {
                left: self.unit.clone(),
                right: other.unit.clone(),
            })
        }
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit
            && within(self.value, other.value, VALUE_TOLERANCE)
            && within(self.error_margin, other.error_margin, MARGIN_TOLERANCE)
    }
}

impl Monoid for Amount {
    fn identity() -> Self {
        Self::neutral("")
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        self.add(other)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if self.error_margin != 0.0 {
            write!(f, "+/-{}", self.error_margin)?;
        }
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}

/// An amount that keeps track of how much of it is certified.
///
/// `score / weight` estimates the certified fraction: a fully certified
/// supplier contributes score 1 and weight 1, an uncertified one score 0 and
/// weight 1.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CertifiedAmount {
    amount: Amount,
    score: f64,
    weight: f64,
}

impl CertifiedAmount {
    /// Create a certified amount from its parts.
    pub fn new(amount: Amount, score: f64, weight: f64) -> Self {
        Self {
            amount,
            score,
            weight,
        }
    }

    /// A fully certified amount.
    pub fn certified(value: f64, unit: impl Into<String>, error_margin: f64) -> Self {
        Self::new(Amount::new(value, unit, error_margin), 1.0, 1.0)
    }

    /// A fully uncertified amount.
    pub fn uncertified(value: f64, unit: impl Into<String>, error_margin: f64) -> Self {
        Self::new(Amount::new(value, unit, error_margin), 0.0, 1.0)
    }

    /// Zero of the given unit, carrying no certification weight.
    pub fn neutral(unit: impl Into<String>) -> Self {
        Self::new(Amount::neutral(unit), 0.0, 0.0)
    }

    /// The underlying amount.
    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Total certification score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Total weight the score is measured against.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Check that every component is a finite number.
    pub fn validate(&self) -> MonoidResult<()> {
        self.amount.validate()?;
        ensure_finite("certification score", self.score)?;
        ensure_finite("certification weight", self.weight)
    }

    /// Sum amounts, scores and weights. Units must match.
    pub fn add(&self, other: &CertifiedAmount) -> MonoidResult<CertifiedAmount> {
        Ok(CertifiedAmount {
            amount: self.amount.add(&other.amount)?,
            score: self.score + other.score,
            weight: self.weight + other.weight,
        })
    }

    /// Contribute only `coefficient` of this amount to a larger whole.
    ///
    /// The amount and score are multiplied, the weight is replaced by the
    /// coefficient: the contribution is normalised against its own share.
    pub fn scale(&self, coefficient: f64) -> CertifiedAmount {
        CertifiedAmount {
            amount: self.amount.scale(coefficient),
            score: coefficient * self.score,
            weight: coefficient,
        }
    }

    /// Certified share in percent, 0 when nothing carries weight.
    pub fn certified_percentage(&self) -> f64 {
        if self.weight == 0.0 {
            0.0
        } else {
            100.0 * self.score / self.weight
        }
    }
}

impl PartialEq for CertifiedAmount {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
            && within(self.score, other.score, CERTIFICATION_TOLERANCE)
            && within(self.weight, other.weight, CERTIFICATION_TOLERANCE)
    }
}

impl Monoid for CertifiedAmount {
    fn identity() -> Self {
        Self::new(Amount::identity(), 0.0, 0.0)
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        self.add(other)
    }
}

impl fmt::Display for CertifiedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}% certified)",
            self.amount,
            self.certified_percentage().trunc() as i64
        )
    }
}
