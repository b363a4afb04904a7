//! Classification predicates for loosely-typed values.

use crate::value::Value;

/// `true` for non-negative integers and for strings in canonical decimal
/// form (`"0"`, `"1"`, `"1000"`; not `"01"`, `" 1"`, `"+1"` or `"1.0"`).
///
/// ```
/// use nestval_core::{is_array_index, Value};
///
/// assert!(is_array_index(&Value::from("0")));
/// assert!(is_array_index(&Value::from(123i64)));
/// assert!(!is_array_index(&Value::from(-1i64)));
/// assert!(!is_array_index(&Value::from(3.6)));
/// ```
pub fn is_array_index(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            if n.is_u64() {
                return true;
            }
            // Floats such as `5.0` still name an index.
            n.as_f64()
                .is_some_and(|f| f >= 0.0 && f.fract() == 0.0 && f.is_finite())
        }
        Value::String(s) => is_canonical_index(s),
        _ => false,
    }
}

fn is_canonical_index(s: &str) -> bool {
    match s.as_bytes() {
        [b'0'] => true,
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
        [] => false,
    }
}

/// `true` for strings starting with `http://` or `https://`.
///
/// ```
/// use nestval_core::{is_url, Value};
///
/// assert!(is_url(&Value::from("https://foo/bar?bla=1")));
/// assert!(!is_url(&Value::from("http:/foobar")));
/// assert!(!is_url(&Value::from("/foo/bar")));
/// ```
pub fn is_url(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.starts_with("http://") || s.starts_with("https://"))
}
