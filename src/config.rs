// Copyright 2025 Cowboy AI, LLC.

//! Loading configuration fragments from JSON.
//!
//! A composition fragment is a JSON object whose values are tagged monoids:
//!
//! ```json
//! {
//!   "COLOR":   { "kind": "last_wins", "value": "RED" },
//!   "TIMEOUT": { "kind": "min",       "value": 25 },
//!   "db":      { "kind": "nested",    "value": { "POOL": { "kind": "min", "value": 8 } } }
//! }
//! ```
//!
//! An overlay fragment is a plain JSON object. Fragments are parsed and
//! validated here, then folded with [`Monoid::append`].

use schemars::schema::RootSchema;
use schemars::schema_for;
use serde_json::Value;
use tracing::debug;

use crate::composition::MonoidMap;
use crate::errors::{MonoidError, MonoidResult};
use crate::monoid::Monoid;
use crate::overlay::OverlayMap;

fn parse_object(json: &str, what: &str) -> MonoidResult<Value> {
    let document: Value = serde_json::from_str(json)?;
    if !document.is_object() {
        return Err(MonoidError::invalid(format!(
            "{what} fragment must be a JSON object"
        )));
    }
    Ok(document)
}

/// Parse and validate one composition fragment.
pub fn load_composition(json: &str) -> MonoidResult<MonoidMap> {
    let document = parse_object(json, "composition")?;
    let map: MonoidMap = serde_json::from_value(document)?;
    map.validate()?;
    debug!(keys = map.len(), "Loaded composition fragment");
    Ok(map)
}

/// Parse one flat overlay fragment.
pub fn load_overlay(json: &str) -> MonoidResult<OverlayMap> {
    let document = parse_object(json, "overlay")?;
    let map: OverlayMap = serde_json::from_value(document)?;
    debug!(keys = map.len(), "Loaded overlay fragment");
    Ok(map)
}

/// Render a composition back to its JSON form.
pub fn render_composition(map: &MonoidMap) -> MonoidResult<String> {
    Ok(serde_json::to_string_pretty(map)?)
}

/// Parse every fragment and append them in order.
pub fn merge_fragments<I, S>(fragments: I) -> MonoidResult<MonoidMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged = MonoidMap::identity();
    let mut count = 0usize;
    for fragment in fragments {
        merged = merged.append(&load_composition(fragment.as_ref())?)?;
        count += 1;
    }
    debug!(fragments = count, keys = merged.len(), "Merged composition fragments");
    Ok(merged)
}

/// Parse every overlay fragment and overlay them in order.
pub fn overlay_fragments<I, S>(fragments: I) -> MonoidResult<OverlayMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .try_fold(OverlayMap::identity(), |acc, fragment| {
            Ok(acc.overlay(&load_overlay(fragment.as_ref())?))
        })
}

/// JSON Schema describing a composition fragment.
pub fn composition_schema() -> RootSchema {
    schema_for!(MonoidMap)
}
