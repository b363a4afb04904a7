//! Non-destructive deep merge.
//!
//! `deep_merge(base, overlay)` lays `overlay` over `base` and returns a new
//! value. Neither input is touched; the result is built from clones, so later
//! edits to it can never leak back into the caller's data.
//!
//! # Rules
//!
//! - Two mappings merge key by key, recursing where both sides hold mappings.
//! - An overlay entry holding [`Value::Undefined`] is "no override": the base
//!   entry survives (and a key missing from the base is not introduced).
//! - An overlay entry holding [`Value::Null`] is an explicit override.
//! - Anything else in the overlay (scalars, arrays, a mapping replacing a
//!   scalar) replaces the base entry wholesale. Arrays are not merged.

use tracing::trace;

use crate::value::{Map, Value};

/// Merge `overlay` onto `base`, returning a fresh value.
///
/// When either side is not a mapping the overlay wins, unless it is
/// [`Value::Undefined`], in which case the base is returned.
///
/// # Examples
///
/// ```
/// use nestval_core::{deep_merge, Value};
/// use serde_json::json;
///
/// let base = Value::from(json!({"a": 0, "e": {"f": 4, "g": 5}}));
/// let overlay = Value::from(json!({"e": {"f": 5, "h": 6}}));
/// assert_eq!(
///     deep_merge(&base, &overlay),
///     Value::from(json!({"a": 0, "e": {"f": 5, "g": 5, "h": 6}}))
/// );
/// ```
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(merge_maps(base_map, overlay_map))
        }
        (_, Value::Undefined) => base.clone(),
        (_, other) => other.clone(),
    }
}

/// Fold `layers` left to right with [`deep_merge`], starting from `{}`.
///
/// Later layers take precedence, so the usual order is defaults first and the
/// most specific overrides last.
///
/// ```
/// use nestval_core::{deep_merge_all, Value};
/// use serde_json::json;
///
/// let defaults = Value::from(json!({"port": 80, "tls": {"enabled": false}}));
/// let file = Value::from(json!({"tls": {"enabled": true}}));
/// let cli = Value::from(json!({"port": 8443}));
///
/// assert_eq!(
///     deep_merge_all([&defaults, &file, &cli]),
///     Value::from(json!({"port": 8443, "tls": {"enabled": true}}))
/// );
/// ```
pub fn deep_merge_all<'a, I>(layers: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    layers
        .into_iter()
        .fold(Value::empty_object(), |acc, layer| deep_merge(&acc, layer))
}

fn merge_maps(base: &Map, overlay: &Map) -> Map {
    let mut result = base.clone();

    for (key, incoming) in overlay {
        if incoming.is_undefined() {
            trace!(key = %key, "undefined overlay entry keeps base value");
            continue;
        }
        let merged = match base.get(key) {
            Some(existing) => deep_merge(existing, incoming),
            None => incoming.clone(),
        };
        trace!(key = %key, kind = merged.kind(), "merged key");
        result.insert(key.clone(), merged);
    }

    result
}
