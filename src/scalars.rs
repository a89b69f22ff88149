// Copyright 2025 Cowboy AI, LLC.

//! Scalar monoids wrapping a single primitive, one per merge policy.
//!
//! | Type | `append(a, b)` | identity |
//! |---|---|---|
//! | [`LastWinsString`] | `b`, unless `b` is empty | `""` |
//! | [`MinNumber`] | `min(a, b)` | `i64::MAX` |
//! | [`AndBoolean`] | `a && b` | `true` |
//! | [`ConcatString`] | `a ++ b` | `""` |
//!
//! Equality is exact since the wrapped primitives are discrete.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::MonoidResult;
use crate::monoid::Monoid;

/// A string where the most recently appended non-empty value wins.
///
/// The empty string means "not set": it never overwrites a value, which makes
/// it a neutral element on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct LastWinsString(String);

impl LastWinsString {
    /// Wrap a string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The current value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no value has been set.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl Monoid for LastWinsString {
    fn identity() -> Self {
        Self::default()
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        if other.is_unset() {
            Ok(self.clone())
        } else {
            Ok(other.clone())
        }
    }
}

impl fmt::Display for LastWinsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LastWinsString({})", self.0)
    }
}

/// An integer keeping the minimum of everything appended to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MinNumber(i64);

impl MinNumber {
    /// Wrap an integer value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The current minimum.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Monoid for MinNumber {
    fn identity() -> Self {
        Self(i64::MAX)
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        Ok(Self(self.0.min(other.0)))
    }
}

impl fmt::Display for MinNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinNumber({})", self.0)
    }
}

/// A flag that stays enabled only while every appended flag is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AndBoolean(bool);

impl AndBoolean {
    /// Wrap a boolean value.
    pub fn new(value: bool) -> Self {
        Self(value)
    }

    /// The current conjunction.
    pub fn value(&self) -> bool {
        self.0
    }
}

impl Monoid for AndBoolean {
    fn identity() -> Self {
        Self(true)
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        Ok(Self(self.0 && other.0))
    }
}

impl fmt::Display for AndBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AndBoolean({})", self.0)
    }
}

/// A string that grows by concatenation, left operand first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ConcatString(String);

impl ConcatString {
    /// Wrap a string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The concatenated value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Monoid for ConcatString {
    fn identity() -> Self {
        Self::default()
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        let mut joined = String::with_capacity(self.0.len() + other.0.len());
        joined.push_str(&self.0);
        joined.push_str(&other.0);
        Ok(Self(joined))
    }
}

impl fmt::Display for ConcatString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConcatString({})", self.0)
    }
}
