// Copyright 2025 Cowboy AI, LLC.

//! Ratios composing under multiplication, optionally keeping a human-readable
//! trace of how they were derived.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{MonoidError, MonoidResult};
use crate::monoid::Monoid;

/// `numerator / denominator`, kept unreduced.
///
/// Equality compares the pair and ignores the trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RatioFields")]
pub struct Ratio {
    numerator: i64,
    denominator: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    trace: String,
}

#[derive(Deserialize)]
struct RatioFields {
    numerator: i64,
    denominator: i64,
    #[serde(default)]
    trace: String,
}

impl TryFrom<RatioFields> for Ratio {
    type Error = MonoidError;

    fn try_from(fields: RatioFields) -> MonoidResult<Self> {
        let ratio = Ratio::new(fields.numerator, fields.denominator)?;
        Ok(Ratio {
            trace: fields.trace,
            ..ratio
        })
    }
}

impl Ratio {
    /// The neutral ratio `1/1`.
    pub const NEUTRAL: Ratio = Ratio {
        numerator: 1,
        denominator: 1,
        trace: String::new(),
    };

    /// Create a ratio; the denominator must not be zero.
    pub fn new(numerator: i64, denominator: i64) -> MonoidResult<Self> {
        if denominator == 0 {
            return Err(MonoidError::invalid("ratio denominator must not be zero"));
        }
        Ok(Self {
            numerator,
            denominator,
            trace: String::new(),
        })
    }

    /// Numerator.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Value of the ratio.
    pub fn ratio(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// How this ratio was derived, e.g. `(1/3)*(5/2)`; empty for a literal.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// `n/d` form.
    pub fn as_fraction(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    /// Product of two ratios, recording the derivation.
    pub fn multiply(&self, other: &Ratio) -> MonoidResult<Ratio> {
        if other.is_neutral_literal() {
            return Ok(self.clone());
        }
        if self.is_neutral_literal() {
            return Ok(other.clone());
        }
        let numerator = self
            .numerator
            .checked_mul(other.numerator)
            .ok_or_else(|| MonoidError::overflow("ratio numerator"))?;
        let denominator = self
            .denominator
            .checked_mul(other.denominator)
            .ok_or_else(|| MonoidError::overflow("ratio denominator"))?;
        Ok(Ratio {
            numerator,
            denominator,
            trace: format!("{}*{}", self.derivation(), other.derivation()),
        })
    }

    fn derivation(&self) -> String {
        if self.trace.is_empty() {
            format!("({})", self.as_fraction())
        } else {
            self.trace.clone()
        }
    }

    fn is_neutral_literal(&self) -> bool {
        self.numerator == 1 && self.denominator == 1 && self.trace.is_empty()
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Ratio {}

impl Monoid for Ratio {
    fn identity() -> Self {
        Self::NEUTRAL
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        self.multiply(other)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.as_fraction(), self.ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> Ratio {
        Ratio::new(n, d).unwrap()
    }

    #[test]
    fn test_neutral() {
        assert_eq!(ratio(2, 1).multiply(&Ratio::NEUTRAL).unwrap(), ratio(2, 1));
        assert_eq!(Ratio::identity().multiply(&ratio(2, 1)).unwrap(), ratio(2, 1));
    }

    #[test]
    fn test_composition_of_ratios() {
        assert_eq!(ratio(100, 50).multiply(&ratio(2, 2)).unwrap(), ratio(200, 100));
        assert_eq!(ratio(2, 1).multiply(&ratio(3, 2)).unwrap(), ratio(6, 2));
    }

    #[test]
    fn test_trace() {
        let product = ratio(1, 3).multiply(&ratio(5, 2)).unwrap();
        assert_eq!(product.trace(), "(1/3)*(5/2)");
        let chained = product.multiply(&ratio(2, 7)).unwrap();
        assert_eq!(chained.trace(), "(1/3)*(5/2)*(2/7)");
        assert_eq!(ratio(1, 3).trace(), "");
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert!(Ratio::new(1, 0).is_err());
    }

    #[test]
    fn test_product_overflow() {
        let err = ratio(i64::MAX, 1).multiply(&ratio(2, 1)).unwrap_err();
        assert_eq!(err, MonoidError::overflow("ratio numerator"));

        let err = ratio(1, i64::MAX).multiply(&ratio(1, 2)).unwrap_err();
        assert_eq!(err, MonoidError::overflow("ratio denominator"));

        let big = ratio(i64::MAX, i64::MAX);
        assert_eq!(big.append(&Ratio::identity()).unwrap(), big);
    }

    #[test]
    fn test_deserialization_is_validated() {
        let traced: Ratio =
            serde_json::from_str(r#"{"numerator": 5, "denominator": 6, "trace": "(1/3)*(5/2)"}"#)
                .unwrap();
        assert_eq!(traced, ratio(5, 6));
        assert_eq!(traced.trace(), "(1/3)*(5/2)");

        let literal: Ratio = serde_json::from_str(r#"{"numerator": 2, "denominator": 1}"#).unwrap();
        assert_eq!(literal.trace(), "");

        assert!(serde_json::from_str::<Ratio>(r#"{"numerator": 1, "denominator": 0}"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ratio(6, 2).to_string(), "6/2 = 3");
    }
}
