// Copyright 2025 Cowboy AI, LLC.

//! Fixed-bucket histogram over the closed range `[0, 100]`.
//!
//! The range is split into `N` buckets of equal width. A point equal to the
//! upper bound lands in the last bucket. Histograms are never filled in
//! place: [`Histogram::with_points`] builds a new histogram of the same size,
//! and [`Monoid::append`] sums two histograms bucket by bucket.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{MonoidError, MonoidResult};
use crate::monoid::Monoid;

/// Lower bound of the measured range (inclusive).
pub const LOWER_BOUND: f64 = 0.0;

/// Upper bound of the measured range (inclusive).
pub const UPPER_BOUND: f64 = 100.0;

/// Bucket count commonly used for percentages.
pub const DEFAULT_BUCKETS: usize = 10;

/// Frequency counts of points in `[0, 100]`.
///
/// The identity is the unsized histogram (no buckets); appending it to any
/// histogram returns that histogram. Every other histogram has at least one
/// bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Histogram {
    buckets: Vec<u32>,
}

impl Histogram {
    /// An all-zero histogram with `bucket_count` buckets.
    pub fn empty(bucket_count: usize) -> MonoidResult<Self> {
        if bucket_count == 0 {
            return Err(MonoidError::invalid("a histogram needs at least one bucket"));
        }
        Ok(Self {
            buckets: vec![0; bucket_count],
        })
    }

    /// A new histogram of the same size counting exactly `values`.
    ///
    /// Existing counts are not carried over.
    pub fn with_points(&self, values: &[f64]) -> MonoidResult<Self> {
        if self.buckets.is_empty() {
            return Err(MonoidError::invalid(
                "cannot bin points into a histogram without buckets",
            ));
        }
        let mut buckets = vec![0u32; self.size()];
        for &value in values {
            let index = self.bucket_for(value)?;
            buckets[index] = buckets[index]
                .checked_add(1)
                .ok_or_else(|| MonoidError::overflow("histogram bucket count"))?;
        }
        Ok(Self { buckets })
    }

    /// A new histogram of the same size holding the given raw counts.
    pub fn with_buckets(&self, counts: Vec<u32>) -> MonoidResult<Self> {
        if counts.len() != self.size() {
            return Err(MonoidError::SizeMismatch {
                left: self.size(),
                right: counts.len(),
            });
        }
        Ok(Self { buckets: counts })
    }

    /// Number of buckets.
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of points counted.
    pub fn count(&self) -> u64 {
        self.buckets.iter().map(|&n| u64::from(n)).sum()
    }

    /// Raw bucket counts.
    pub fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    /// Width of one bucket.
    pub fn bucket_width(&self) -> f64 {
        (UPPER_BOUND - LOWER_BOUND) / self.size() as f64
    }

    /// Index of the bucket `value` falls into.
    pub fn bucket_for(&self, value: f64) -> MonoidResult<usize> {
        if !(LOWER_BOUND..=UPPER_BOUND).contains(&value) {
            return Err(MonoidError::OutOfRange {
                value,
                min: LOWER_BOUND,
                max: UPPER_BOUND,
            });
        }
        let last = self.size().saturating_sub(1);
        if value == UPPER_BOUND {
            return Ok(last);
        }
        let index = ((value - LOWER_BOUND) / self.bucket_width()).floor() as usize;
        Ok(index.min(last))
    }

    /// Share of all points in bucket `index`, in percent. An empty histogram
    /// reports 0 for every bucket.
    pub fn frequency_in_bin(&self, index: usize) -> MonoidResult<f64> {
        let bucket = self
            .buckets
            .get(index)
            .ok_or(MonoidError::IndexOutOfRange {
                index,
                size: self.size(),
            })?;
        let total = self.count();
        if total == 0 {
            return Ok(0.0);
        }
        Ok(100.0 * f64::from(*bucket) / total as f64)
    }

    /// Reject the unsized histogram outside of the identity role.
    pub fn validate(&self) -> MonoidResult<()> {
        if self.buckets.is_empty() {
            Err(MonoidError::invalid("a histogram needs at least one bucket"))
        } else {
            Ok(())
        }
    }
}

impl Monoid for Histogram {
    fn identity() -> Self {
        Self::default()
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        if other.buckets.is_empty() {
            return Ok(self.clone());
        }
        if self.buckets.is_empty() {
            return Ok(other.clone());
        }
        if self.size() != other.size() {
            return Err(MonoidError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        let buckets = self
            .buckets
            .iter()
            .zip(&other.buckets)
            .map(|(a, b)| {
                a.checked_add(*b)
                    .ok_or_else(|| MonoidError::overflow("histogram bucket count"))
            })
            .collect::<MonoidResult<Vec<u32>>>()?;
        Ok(Self { buckets })
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Histogram {:?}", self.buckets)
    }
}
