// Copyright 2025 Cowboy AI, LLC.

//! Energy and carbon impact accumulated across a supply chain.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::amount::CertifiedAmount;
use crate::errors::{MonoidError, MonoidResult};
use crate::monoid::Monoid;

/// The energy consumption and carbon emission of a product, summed over its
/// suppliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EnvironmentalImpact {
    supplier_count: u32,
    energy: CertifiedAmount,
    carbon: CertifiedAmount,
}

impl EnvironmentalImpact {
    /// Create an impact from its parts.
    pub fn new(supplier_count: u32, energy: CertifiedAmount, carbon: CertifiedAmount) -> Self {
        Self {
            supplier_count,
            energy,
            carbon,
        }
    }

    /// The impact of one supplier.
    pub fn single_supplier(energy: CertifiedAmount, carbon: CertifiedAmount) -> Self {
        Self::new(1, energy, carbon)
    }

    /// Number of suppliers accumulated so far.
    pub fn supplier_count(&self) -> u32 {
        self.supplier_count
    }

    /// Energy consumption.
    pub fn energy(&self) -> &CertifiedAmount {
        &self.energy
    }

    /// Carbon emission.
    pub fn carbon(&self) -> &CertifiedAmount {
        &self.carbon
    }

    /// Check every numeric component is finite.
    pub fn validate(&self) -> MonoidResult<()> {
        self.energy.validate()?;
        self.carbon.validate()
    }

    /// Scale both certified amounts by `coefficient`; the supplier count is kept.
    pub fn scale(&self, coefficient: f64) -> Self {
        Self {
            supplier_count: self.supplier_count,
            energy: self.energy.scale(coefficient),
            carbon: self.carbon.scale(coefficient),
        }
    }

    /// Append `coefficient` of `other`.
    pub fn add_weighted(&self, coefficient: f64, other: &Self) -> MonoidResult<Self> {
        self.append(&other.scale(coefficient))
    }
}

impl Monoid for EnvironmentalImpact {
    fn identity() -> Self {
        Self::new(0, CertifiedAmount::identity(), CertifiedAmount::identity())
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        let supplier_count = self
            .supplier_count
            .checked_add(other.supplier_count)
            .ok_or_else(|| MonoidError::overflow("supplier count"))?;
        Ok(Self {
            supplier_count,
            energy: self.energy.add(&other.energy)?,
            carbon: self.carbon.add(&other.carbon)?,
        })
    }
}

impl fmt::Display for EnvironmentalImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EnvironmentalImpact({} supplier{}, energy: {}, carbon: {})",
            self.supplier_count,
            if self.supplier_count == 1 { "" } else { "s" },
            self.energy,
            self.carbon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;

    fn cooking() -> EnvironmentalImpact {
        EnvironmentalImpact::single_supplier(
            CertifiedAmount::certified(1.0, "kWh", 0.3),
            CertifiedAmount::certified(1.0, "T", 0.25),
        )
    }

    fn dough() -> EnvironmentalImpact {
        EnvironmentalImpact::single_supplier(
            CertifiedAmount::uncertified(5.0, "kWh", 5.0),
            CertifiedAmount::uncertified(0.5, "T", 1.0),
        )
    }

    fn tomato_sauce() -> EnvironmentalImpact {
        EnvironmentalImpact::single_supplier(
            CertifiedAmount::uncertified(3.0, "kWh", 1.0),
            CertifiedAmount::certified(0.2, "T", 0.1),
        )
    }

    #[test]
    fn test_pizza_impact() {
        let expected = EnvironmentalImpact::new(
            3,
            CertifiedAmount::new(Amount::new(6.9, "kWh", 5.6), 1.0, 2.3),
            CertifiedAmount::new(Amount::new(1.56, "T", 1.28), 1.3, 2.3),
        );

        let pizza = cooking()
            .append(&dough())
            .unwrap()
            .add_weighted(0.3, &tomato_sauce())
            .unwrap();

        assert_eq!(pizza, expected);
        assert!(pizza
            .to_string()
            .starts_with("EnvironmentalImpact(3 suppliers, energy: "));
    }

    #[test]
    fn test_identity() {
        let pizza = cooking().append(&dough()).unwrap();
        assert_eq!(EnvironmentalImpact::identity().append(&pizza).unwrap(), pizza);
        assert_eq!(pizza.append(&EnvironmentalImpact::identity()).unwrap(), pizza);
    }

    #[test]
    fn test_swapped_units_fail() {
        let swapped = EnvironmentalImpact::single_supplier(
            CertifiedAmount::certified(1.0, "T", 0.0),
            CertifiedAmount::certified(1.0, "kWh", 0.0),
        );
        let err = cooking().append(&swapped).unwrap_err();
        assert!(matches!(err, MonoidError::UnitMismatch { .. }));
    }

    #[test]
    fn test_supplier_count_overflow() {
        let saturated = EnvironmentalImpact::new(
            u32::MAX,
            CertifiedAmount::neutral("kWh"),
            CertifiedAmount::neutral("T"),
        );
        let err = saturated.append(&cooking()).unwrap_err();
        assert_eq!(err, MonoidError::overflow("supplier count"));
        assert_eq!(
            saturated.append(&EnvironmentalImpact::identity()).unwrap(),
            saturated
        );
    }

    #[test]
    fn test_single_supplier_display() {
        assert_eq!(
            dough().to_string(),
            "EnvironmentalImpact(1 supplier, energy: 5+/-5 kWh (0% certified), carbon: 0.5+/-1 T (0% certified))"
        );
    }
}
