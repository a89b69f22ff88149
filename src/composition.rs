// Copyright 2025 Cowboy AI, LLC.

//! Heterogeneous composition of monoid values stored under string keys.
//!
//! A [`MonoidMap`] maps names to [`MonoidValue`]s, a closed sum type over
//! every concrete monoid in this crate. Appending two maps appends the values
//! found under the same key, each with its own merge rule, and keeps the
//! values found on one side only. The empty map is the identity.
//!
//! ```text
//! {COLOR: LastWins(RED),  TIMEOUT: Min(25)} ++ {COLOR: LastWins(BLUE), TIMEOUT: Min(35), USER: Concat(x)}
//!   = {COLOR: LastWins(BLUE), TIMEOUT: Min(25), USER: Concat(x)}
//! ```
//!
//! Two different variants under the same key cannot be combined and fail
//! with [`MonoidError::TypeMismatch`]. For plain right-biased overwriting see
//! [`OverlayMap`](crate::OverlayMap).

use std::fmt;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::accumulators::Average;
use crate::amount::{Amount, CertifiedAmount};
use crate::errors::{MonoidError, MonoidResult};
use crate::histogram::Histogram;
use crate::impact::EnvironmentalImpact;
use crate::monoid::Monoid;
use crate::scalars::{AndBoolean, ConcatString, LastWinsString, MinNumber};

/// Tag naming the concrete monoid held by a [`MonoidValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MonoidKind {
    /// [`LastWinsString`]
    LastWins,
    /// [`MinNumber`]
    Min,
    /// [`AndBoolean`]
    And,
    /// [`ConcatString`]
    Concat,
    /// [`Amount`]
    Amount,
    /// [`CertifiedAmount`]
    Certified,
    /// [`EnvironmentalImpact`]
    Impact,
    /// [`Histogram`]
    Histogram,
    /// [`Average`]
    Average,
    /// Nested [`MonoidMap`]
    Nested,
}

impl MonoidKind {
    /// The name used in serialized documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            MonoidKind::LastWins => "last_wins",
            MonoidKind::Min => "min",
            MonoidKind::And => "and",
            MonoidKind::Concat => "concat",
            MonoidKind::Amount => "amount",
            MonoidKind::Certified => "certified",
            MonoidKind::Impact => "impact",
            MonoidKind::Histogram => "histogram",
            MonoidKind::Average => "average",
            MonoidKind::Nested => "nested",
        }
    }
}

impl fmt::Display for MonoidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot of a [`MonoidMap`].
///
/// Serialized as `{"kind": "<kind>", "value": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MonoidValue {
    /// Last non-empty string wins
    LastWins(LastWinsString),
    /// Minimum of integers
    Min(MinNumber),
    /// Conjunction of flags
    And(AndBoolean),
    /// String concatenation
    Concat(ConcatString),
    /// Physical amount
    Amount(Amount),
    /// Certified physical amount
    Certified(CertifiedAmount),
    /// Supply chain impact
    Impact(EnvironmentalImpact),
    /// Bucket counts
    Histogram(Histogram),
    /// Composable average
    Average(Average),
    /// Nested composition, appended key-wise
    Nested(MonoidMap),
}

impl MonoidValue {
    /// The variant tag.
    pub fn kind(&self) -> MonoidKind {
        match self {
            MonoidValue::LastWins(_) => MonoidKind::LastWins,
            MonoidValue::Min(_) => MonoidKind::Min,
            MonoidValue::And(_) => MonoidKind::And,
            MonoidValue::Concat(_) => MonoidKind::Concat,
            MonoidValue::Amount(_) => MonoidKind::Amount,
            MonoidValue::Certified(_) => MonoidKind::Certified,
            MonoidValue::Impact(_) => MonoidKind::Impact,
            MonoidValue::Histogram(_) => MonoidKind::Histogram,
            MonoidValue::Average(_) => MonoidKind::Average,
            MonoidValue::Nested(_) => MonoidKind::Nested,
        }
    }

    /// Append two values of the same variant.
    pub fn append(&self, other: &MonoidValue) -> MonoidResult<MonoidValue> {
        self.append_at("", other)
    }

    /// Append two values found under `key`; `key` is only used for errors.
    fn append_at(&self, key: &str, other: &MonoidValue) -> MonoidResult<MonoidValue> {
        use MonoidValue as V;

        Ok(match (self, other) {
            (V::LastWins(a), V::LastWins(b)) => V::LastWins(a.append(b)?),
            (V::Min(a), V::Min(b)) => V::Min(a.append(b)?),
            (V::And(a), V::And(b)) => V::And(a.append(b)?),
            (V::Concat(a), V::Concat(b)) => V::Concat(a.append(b)?),
            (V::Amount(a), V::Amount(b)) => V::Amount(a.append(b)?),
            (V::Certified(a), V::Certified(b)) => V::Certified(a.append(b)?),
            (V::Impact(a), V::Impact(b)) => V::Impact(a.append(b)?),
            (V::Histogram(a), V::Histogram(b)) => V::Histogram(a.append(b)?),
            (V::Average(a), V::Average(b)) => V::Average(a.append(b)?),
            (V::Nested(a), V::Nested(b)) => V::Nested(a.append_under(key, b)?),
            (left, right) => {
                debug!(
                    key = %key,
                    left = %left.kind(),
                    right = %right.kind(),
                    "Rejected append of mismatched monoid kinds"
                );
                return Err(MonoidError::TypeMismatch {
                    key: key.to_string(),
                    left: left.kind().to_string(),
                    right: right.kind().to_string(),
                });
            }
        })
    }

    /// Check the invariants a deserialized payload cannot enforce by itself.
    pub fn validate(&self) -> MonoidResult<()> {
        match self {
            MonoidValue::Amount(a) => a.validate(),
            MonoidValue::Certified(c) => c.validate(),
            MonoidValue::Impact(i) => i.validate(),
            MonoidValue::Histogram(h) => h.validate(),
            MonoidValue::Nested(m) => m.validate(),
            MonoidValue::LastWins(_)
            | MonoidValue::Min(_)
            | MonoidValue::And(_)
            | MonoidValue::Concat(_)
            | MonoidValue::Average(_) => Ok(()),
        }
    }
}

impl fmt::Display for MonoidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonoidValue::LastWins(v) => write!(f, "{v}"),
            MonoidValue::Min(v) => write!(f, "{v}"),
            MonoidValue::And(v) => write!(f, "{v}"),
            MonoidValue::Concat(v) => write!(f, "{v}"),
            MonoidValue::Amount(v) => write!(f, "{v}"),
            MonoidValue::Certified(v) => write!(f, "{v}"),
            MonoidValue::Impact(v) => write!(f, "{v}"),
            MonoidValue::Histogram(v) => write!(f, "{v}"),
            MonoidValue::Average(v) => write!(f, "{v}"),
            MonoidValue::Nested(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_monoid {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for MonoidValue {
                fn from(value: $ty) -> Self {
                    MonoidValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_monoid! {
    LastWinsString => LastWins,
    MinNumber => Min,
    AndBoolean => And,
    ConcatString => Concat,
    Amount => Amount,
    CertifiedAmount => Certified,
    EnvironmentalImpact => Impact,
    Histogram => Histogram,
    Average => Average,
    MonoidMap => Nested,
}

/// A keyed container of heterogeneous monoid values, appended key-wise.
///
/// Insertion order is kept for rendering; equality ignores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MonoidMap {
    entries: IndexMap<String, MonoidValue>,
}

impl MonoidMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from key/value pairs. Later duplicates replace earlier ones.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MonoidValue>,
    {
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }

    /// A new map with `key` set to `value`, replacing any previous value.
    pub fn with(&self, key: impl Into<String>, value: impl Into<MonoidValue>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&MonoidValue> {
        self.entries.get(key)
    }

    /// True if `key` holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no key is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonoidValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Validate every value, recursing into nested maps.
    ///
    /// Failures name the dotted key path of the offending value.
    pub fn validate(&self) -> MonoidResult<()> {
        self.validate_under("")
    }

    fn validate_under(&self, prefix: &str) -> MonoidResult<()> {
        for (key, value) in &self.entries {
            let path = join_key(prefix, key);
            match value {
                MonoidValue::Nested(nested) => nested.validate_under(&path),
                other => other.validate().map_err(|err| match err {
                    MonoidError::InvalidConstruction(reason) => {
                        MonoidError::InvalidConstruction(format!("{path}: {reason}"))
                    }
                    other => other,
                }),
            }?;
        }
        Ok(())
    }

    fn append_under(&self, prefix: &str, other: &Self) -> MonoidResult<Self> {
        let mut entries = self.entries.clone();
        for (key, right) in &other.entries {
            let merged = match self.entries.get(key) {
                Some(left) => left.append_at(&join_key(prefix, key), right)?,
                None => right.clone(),
            };
            entries.insert(key.clone(), merged);
        }
        trace!(
            left = self.len(),
            right = other.len(),
            merged = entries.len(),
            "Appended composition maps"
        );
        Ok(Self { entries })
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

impl Monoid for MonoidMap {
    fn identity() -> Self {
        Self::new()
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        self.append_under("", other)
    }
}

impl FromIterator<(String, MonoidValue)> for MonoidMap {
    fn from_iter<T: IntoIterator<Item = (String, MonoidValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for MonoidMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}
