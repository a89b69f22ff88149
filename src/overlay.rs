// Copyright 2025 Cowboy AI, LLC.

//! Flat configuration overlay where the right-hand map always wins.
//!
//! Unlike [`MonoidMap`](crate::MonoidMap), values are not merged: a key set
//! on the right replaces the left value wholesale. The operation is
//! associative but not commutative.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::MonoidResult;
use crate::monoid::Monoid;

/// Key/value configuration overlaid by right-biased overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayMap {
    entries: IndexMap<String, Value>,
}

impl OverlayMap {
    /// An empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new overlay with `key` set to `value`.
    pub fn with(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no key is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every key of `other` overwrites the same key of `self`.
    pub fn overlay(&self, other: &OverlayMap) -> OverlayMap {
        let mut entries = self.entries.clone();
        for (key, value) in &other.entries {
            entries.insert(key.clone(), value.clone());
        }
        OverlayMap { entries }
    }
}

impl Monoid for OverlayMap {
    fn identity() -> Self {
        Self::new()
    }

    fn append(&self, other: &Self) -> MonoidResult<Self> {
        Ok(self.overlay(other))
    }
}

impl FromIterator<(String, Value)> for OverlayMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for OverlayMap {
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
