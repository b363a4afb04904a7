//! Structural equality with loose scalar comparison.
//!
//! Unlike `PartialEq` on [`Value`], which is strict, [`equal_values`] answers
//! "do these two documents say the same thing?":
//!
//! - `null` and undefined are interchangeable, and equal to nothing else.
//! - Numbers compare by numeric value, so `1` equals `1.0`.
//! - A string equals a number when it parses to the same number (`"1"` equals
//!   `1`). Parsing is strict: no surrounding whitespace, and the empty string
//!   is not zero.
//! - Booleans only equal booleans.
//! - Mappings compare key sets and then values, ignoring order; sequences
//!   compare element by element, in order.

use serde_json::Number;

use crate::value::{Map, Value};

/// Compare two values for structural, loosely-typed equality.
///
/// # Examples
///
/// ```
/// use nestval_core::{equal_values, Value};
/// use serde_json::json;
///
/// assert!(equal_values(&Value::Null, &Value::Undefined));
/// assert!(!equal_values(&Value::Null, &Value::from("")));
/// assert!(equal_values(&Value::from("1"), &Value::from(1i64)));
/// assert!(equal_values(
///     &Value::from(json!({"a": 1, "b": 2})),
///     &Value::from(json!({"b": 2, "a": 1}))
/// ));
/// assert!(!equal_values(&Value::from(json!([2, 1])), &Value::from(json!([1, 2]))));
/// ```
pub fn equal_values(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Object(left), Value::Object(right)) => maps_equal(left, right),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left.iter().zip(right).all(|(l, r)| equal_values(l, r))
        }
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => numbers_equal(left, right),
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            string_equals_number(s, n)
        }
        _ => false,
    }
}

fn maps_equal(left: &Map, right: &Map) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, l)| right.get(key).is_some_and(|r| equal_values(l, r)))
}

/// Integers compare exactly; anything involving a float compares as `f64`.
fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l == r;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

fn string_equals_number(s: &str, n: &Number) -> bool {
    match (s.parse::<f64>(), n.as_f64()) {
        (Ok(parsed), Some(number)) => parsed == number,
        _ => false,
    }
}
