// Copyright 2025 Cowboy AI, LLC.

//! # CIM Monoid
//!
//! Composable, immutable value objects for the Composable Information Machine.
//!
//! Every value in this crate is a monoid: it has an associative `append` and a
//! neutral `identity`, so partial results can be combined incrementally and in
//! any grouping:
//! - **Scalars**: last-wins strings, minimum, logical AND, concatenation
//! - **Amounts**: physical quantities with units, error margins and
//!   certification coverage
//! - **Environmental impact**: energy and carbon summed across suppliers
//! - **Histogram**: fixed-bucket frequency counts over `[0, 100]`
//! - **Composition**: keyed maps of heterogeneous monoids appended key-wise
//! - **Overlay**: flat right-biased configuration overlays
//! - **Accumulators**: lengths, averages, cashflow schedules and ratios
//!
//! ## Design Principles
//!
//! 1. **Immutability**: `append`, `scale` and `with_points` return new values
//! 2. **Typed failures**: incompatible operands produce a [`MonoidError`],
//!    never a silent coercion
//! 3. **Closed dispatch**: heterogeneous values are a tagged enum, so a
//!    mismatched pair is detected instead of cast
//!
//! ```
//! use cim_monoid::{LastWinsString, MinNumber, Monoid, MonoidMap, MonoidValue};
//!
//! let defaults = MonoidMap::new()
//!     .with("COLOR", LastWinsString::new("RED"))
//!     .with("TIMEOUT", MinNumber::new(25));
//! let site = MonoidMap::new()
//!     .with("COLOR", LastWinsString::new("BLUE"))
//!     .with("TIMEOUT", MinNumber::new(35));
//!
//! let merged = defaults.append(&site).unwrap();
//! assert_eq!(merged.get("TIMEOUT"), Some(&MonoidValue::Min(MinNumber::new(25))));
//! ```

#![warn(missing_docs)]

mod accumulators;
mod amount;
mod cashflow;
mod composition;
mod errors;
mod histogram;
mod impact;
mod monoid;
mod overlay;
mod ratio;
mod scalars;
pub mod config;

pub use accumulators::{Average, Length};
pub use amount::{
    Amount, CertifiedAmount, CERTIFICATION_TOLERANCE, MARGIN_TOLERANCE, VALUE_TOLERANCE,
};
pub use cashflow::{Cashflow, CashflowSequence};
pub use composition::{MonoidKind, MonoidMap, MonoidValue};
pub use errors::{MonoidError, MonoidResult};
pub use histogram::{Histogram, DEFAULT_BUCKETS, LOWER_BOUND, UPPER_BOUND};
pub use impact::EnvironmentalImpact;
pub use monoid::Monoid;
pub use overlay::OverlayMap;
pub use ratio::Ratio;
pub use scalars::{AndBoolean, ConcatString, LastWinsString, MinNumber};
