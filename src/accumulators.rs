// Copyright 2025 Cowboy AI, LLC.

//! Running accumulators: a non-negative length and a composable average.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{MonoidError, MonoidResult};
use crate::monoid::Monoid;

/// A non-negative length, summed on append.
///
/// Deserialization goes through [`Length::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Length(f64);

impl Length {
    /// Zero length.
    pub const ZERO: Length = Length(0.0);

    /// Create a length, rejecting negative and non-finite values.
    pub fn new(length: f64) -> MonoidResult<Self> {
        if !length.is_finite() || length < 0.0 {
            return Err(MonoidError::invalid(format!(
                "length must be a positive finite number, got {length}"
            )));
        }
        Ok(Self(length))
    }

    /// The wrapped length.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Sum of two lengths.
    pub fn add(&self, other: &Length) -> Length {
        Length(self.0 + other.0)
    }
}

impl TryFrom<f64> for Length {
    type Error = MonoidError;

    fn try_from(length: f64) -> MonoidResult<Self> {
        Self::new(length)
    }
}

impl From<Length> for f64 {
    fn from(length: Length) -> f64 {
        length.0
    }
}

impl Monoid for Length {
    fn identity() -> Self {
        Self::ZERO
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        Ok(self.add(other))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An average that composes: keeps the count and the sum, not the mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Average {
    count: u64,
    sum: i64,
}

impl Average {
    /// The average of the given values.
    pub fn of(values: &[i64]) -> MonoidResult<Self> {
        let sum = values.iter().try_fold(0i64, |acc, &v| {
            acc.checked_add(v)
                .ok_or_else(|| MonoidError::overflow("average sum"))
        })?;
        Ok(Self {
            count: values.len() as u64,
            sum,
        })
    }

    /// Number of values averaged.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of the values averaged.
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Arithmetic mean, 0 when no value was recorded.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

impl Monoid for Average {
    fn identity() -> Self {
        Self::default()
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        let count = self
            .count
            .checked_add(other.count)
            .ok_or_else(|| MonoidError::overflow("average count"))?;
        let sum = self
            .sum
            .checked_add(other.sum)
            .ok_or_else(|| MonoidError::overflow("average sum"))?;
        Ok(Self { count, sum })
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} = {}", self.sum, self.count, self.average())
    }
}
