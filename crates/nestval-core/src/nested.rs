//! Dotted-path access into nested mappings.
//!
//! A path such as `"request.headers.accept"` names one key per level. Only
//! mappings are traversed; arrays and scalars end the walk.
//!
//! - [`get`] / [`get_or`] read without copying or mutating.
//! - [`set`] writes in place, replacing whatever blocks the path with fresh
//!   empty mappings. It is the only mutating operation in the crate and takes
//!   the root by `&mut`.

use tracing::debug;

use crate::error::{NestvalError, Result};
use crate::value::{Map, Value};

/// A dotted path split into its segments.
///
/// Splitting follows `str::split`, so `"a..b"` has an empty middle segment
/// and `""` is the single empty key.
#[derive(Debug, Clone)]
struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('.').collect(),
        }
    }
}

/// Look up the value at `path`.
///
/// Returns `None` when an intermediate value is not a mapping, a key is
/// missing, or the value found is [`Value::Undefined`].
///
/// # Examples
///
/// ```
/// use nestval_core::{nested, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"foo": {"bar": {"baz": 2}}}));
/// assert_eq!(nested::get(&root, "foo.bar"), Some(&Value::from(json!({"baz": 2}))));
/// assert_eq!(nested::get(&root, "foo.bar.baz.qux"), None);
/// ```
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in Path::parse(path).segments {
        current = current.as_object()?.get(segment)?;
    }
    (!current.is_undefined()).then_some(current)
}

/// Like [`get`], but returns `fallback` when nothing is found.
///
/// ```
/// use nestval_core::{nested, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"foo": 1}));
/// let fallback = Value::from("default value");
/// assert_eq!(nested::get_or(&root, "foo.bar", &fallback), &fallback);
/// ```
pub fn get_or<'a>(root: &'a Value, path: &str, fallback: &'a Value) -> &'a Value {
    get(root, path).unwrap_or(fallback)
}

/// Store `value` at `path`, creating intermediate mappings as needed.
///
/// Any intermediate entry that is missing, `null`, undefined or not a mapping
/// is replaced by an empty mapping before descending. The final segment is
/// overwritten unconditionally.
///
/// # Errors
///
/// Returns [`NestvalError::InvalidArgument`] when `root` is not a mapping.
/// `root` is left untouched in that case.
///
/// # Examples
///
/// ```
/// use nestval_core::{nested, Value};
/// use serde_json::json;
///
/// let mut root = Value::from(json!({"foo": {"bar": {"baz": 2}}}));
/// nested::set(&mut root, "bla.bla", Value::from(1i64)).unwrap();
/// assert_eq!(root, Value::from(json!({"foo": {"bar": {"baz": 2}}, "bla": {"bla": 1}})));
/// ```
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<()> {
    let parsed = Path::parse(path);
    let Some((last, parents)) = parsed.segments.split_last() else {
        return Err(NestvalError::InvalidArgument(format!(
            "path `{path}` has no segments"
        )));
    };

    let mut current = match root {
        Value::Object(map) => map,
        other => {
            return Err(NestvalError::InvalidArgument(format!(
                "cannot set `{path}` on a {} root, expected an object",
                other.kind()
            )))
        }
    };

    for segment in parents {
        current = child_map(current, segment);
    }
    current.insert((*last).to_string(), value);
    Ok(())
}

/// Descend into `map[segment]`, making it an empty mapping first if it is
/// anything else.
fn child_map<'a>(map: &'a mut Map, segment: &str) -> &'a mut Map {
    let slot = map
        .entry(segment.to_string())
        .or_insert_with(Value::empty_object);
    if !slot.is_object() {
        debug!(segment, replaced = slot.kind(), "replacing blocking path segment");
        *slot = Value::empty_object();
    }
    match slot {
        Value::Object(child) => child,
        _ => unreachable!("slot was replaced by an object above"),
    }
}
