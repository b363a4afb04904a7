//! # nestval-core
//!
//! Small primitives for loosely-structured data: nested mappings and sequences
//! of string/number/boolean/null values, as they appear in layered
//! configuration documents.
//!
//! ## Quick start
//!
//! ```rust
//! use nestval_core::{deep_merge, nested, Value};
//! use serde_json::json;
//!
//! let defaults = Value::from(json!({"request": {"timeout": 30, "retries": 2}}));
//! let overrides = Value::from(json!({"request": {"retries": 5}}));
//!
//! let mut merged = deep_merge(&defaults, &overrides);
//! assert_eq!(merged, Value::from(json!({"request": {"timeout": 30, "retries": 5}})));
//!
//! nested::set(&mut merged, "request.headers.accept", json!("text/plain").into()).unwrap();
//! assert_eq!(
//!     nested::get(&merged, "request.headers.accept"),
//!     Some(&Value::from("text/plain"))
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` sum type with an explicit `Undefined` marker
//! - [`merge`] — non-destructive deep merge
//! - [`nested`] — dotted-path `get` / `set`
//! - [`equal`] — structural equality with loose scalar comparison
//! - [`digest`] — random or seeded identifiers
//! - [`classify`] — `is_array_index` and `is_url` predicates
//! - [`error`] — error types

pub mod classify;
pub mod digest;
pub mod equal;
pub mod error;
pub mod merge;
pub mod nested;
pub mod value;

pub use classify::{is_array_index, is_url};
pub use digest::{digest, DigestOptions};
pub use equal::equal_values;
pub use error::{NestvalError, Result};
pub use merge::{deep_merge, deep_merge_all};
pub use value::{Map, Value};
