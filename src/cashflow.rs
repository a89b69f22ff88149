// Copyright 2025 Cowboy AI, LLC.

//! Dated payments and payment schedules.
//!
//! A [`CashflowSequence`] is always kept sorted by date, then amount, so
//! appending two schedules in either order yields the same sequence.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{MonoidError, MonoidResult};
use crate::monoid::Monoid;

/// A single payment of `amount` in `currency` on `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Cashflow {
    amount: f64,
    currency: String,
    date: NaiveDate,
}

impl Cashflow {
    /// Create a cashflow.
    pub fn new(amount: f64, currency: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            currency: currency.into(),
            date,
        }
    }

    /// Paid amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Payment date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Merge two payments falling on the same date in the same currency.
    pub fn add(&self, other: &Cashflow) -> MonoidResult<Cashflow> {
        if self.date != other.date {
            return Err(MonoidError::DateMismatch {
                left: self.date.to_string(),
                right: other.date.to_string(),
            });
        }
        if self.currency != other.currency {
            return Err(MonoidError::UnitMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(Cashflow::new(
            self.amount + other.amount,
            self.currency.clone(),
            self.date,
        ))
    }

    fn schedule_order(&self, other: &Cashflow) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.amount.total_cmp(&other.amount))
            .then_with(|| self.currency.cmp(&other.currency))
    }
}

impl fmt::Display for Cashflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.amount, self.currency, self.date)
    }
}

/// A schedule of cashflows, sorted by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CashflowSequence {
    cashflows: Vec<Cashflow>,
}

impl CashflowSequence {
    /// Build a sequence from cashflows in any order.
    pub fn new(mut cashflows: Vec<Cashflow>) -> Self {
        cashflows.sort_by(Cashflow::schedule_order);
        Self { cashflows }
    }

    /// Append every sequence to this one.
    pub fn add_all<'a, I>(&self, sequences: I) -> CashflowSequence
    where
        I: IntoIterator<Item = &'a CashflowSequence>,
    {
        let mut all = self.cashflows.clone();
        for sequence in sequences {
            all.extend(sequence.cashflows.iter().cloned());
        }
        CashflowSequence::new(all)
    }

    /// Cashflows in schedule order.
    pub fn cashflows(&self) -> &[Cashflow] {
        &self.cashflows
    }

    /// Number of cashflows.
    pub fn len(&self) -> usize {
        self.cashflows.len()
    }

    /// True if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.cashflows.is_empty()
    }

    /// Earliest payment date.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.cashflows.first().map(Cashflow::date)
    }

    /// Latest payment date.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.cashflows.last().map(Cashflow::date)
    }
}

impl Monoid for CashflowSequence {
    fn identity() -> Self {
        Self::default()
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        Ok(self.add_all([other]))
    }
}

impl fmt::Display for CashflowSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, cashflow) in self.cashflows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cashflow}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_reimbursement_plus_interests() {
        let expiry = date("2018-07-19");
        let month1 = date("2018-06-19");
        let month2 = date("2018-05-19");

        let reimbursement = CashflowSequence::new(vec![Cashflow::new(10000.0, "EUR", expiry)]);
        let interests = CashflowSequence::new(vec![
            Cashflow::new(120.0, "EUR", month1),
            Cashflow::new(120.0, "EUR", month2),
            Cashflow::new(120.0, "EUR", expiry),
        ]);
        let expected = CashflowSequence::new(vec![
            Cashflow::new(120.0, "EUR", month1),
            Cashflow::new(120.0, "EUR", month2),
            Cashflow::new(120.0, "EUR", expiry),
            Cashflow::new(10000.0, "EUR", expiry),
        ]);

        let combined = reimbursement.append(&interests).unwrap();
        assert_eq!(combined, expected);
        assert_eq!(interests.append(&reimbursement).unwrap(), expected);
        assert_eq!(combined.first_date(), Some(month2));
        assert_eq!(combined.last_date(), Some(expiry));
    }

    #[test]
    fn test_cashflow_add_requires_same_date_and_currency() {
        let d = date("2018-07-19");
        let sum = Cashflow::new(1.0, "EUR", d)
            .add(&Cashflow::new(2.0, "EUR", d))
            .unwrap();
        assert_eq!(sum.amount(), 3.0);

        let err = Cashflow::new(1.0, "EUR", d)
            .add(&Cashflow::new(2.0, "USD", d))
            .unwrap_err();
        assert!(matches!(err, MonoidError::UnitMismatch { .. }));

        let err = Cashflow::new(1.0, "EUR", d)
            .add(&Cashflow::new(2.0, "EUR", date("2018-06-19")))
            .unwrap_err();
        assert!(matches!(err, MonoidError::DateMismatch { .. }));
    }

    #[test]
    fn test_identity_and_display() {
        let seq = CashflowSequence::new(vec![Cashflow::new(120.0, "EUR", date("2018-05-19"))]);
        assert_eq!(seq.append(&CashflowSequence::identity()).unwrap(), seq);
        assert_eq!(seq.to_string(), "[120 EUR on 2018-05-19]");
    }
}
