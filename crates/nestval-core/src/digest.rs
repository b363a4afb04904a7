//! Random or seeded identifiers.
//!
//! Every digest is 64 lowercase hex characters (a BLAKE3 hash). Seeded
//! digests hash the seed alone, so they are stable across calls and
//! processes. Unseeded digests hash a fresh ULID together with a process-wide
//! counter; they are unique in practice but not meant as secrets.

use std::sync::atomic::{AtomicU64, Ordering};

use blake3::Hasher;
use tracing::debug;
use ulid::Ulid;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Options for [`digest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestOptions {
    /// When set, the digest is a pure function of this seed.
    pub seed: Option<String>,
}

impl DigestOptions {
    pub fn seeded(seed: impl Into<String>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }
}

/// Produce a digest, deterministic when `options.seed` is set.
///
/// # Examples
///
/// ```
/// use nestval_core::{digest, DigestOptions};
///
/// let seeded = DigestOptions::seeded("foobar");
/// assert_eq!(digest(&seeded), digest(&seeded));
/// assert_ne!(digest(&DigestOptions::default()), digest(&DigestOptions::default()));
/// ```
pub fn digest(options: &DigestOptions) -> String {
    let mut hasher = Hasher::new();

    match &options.seed {
        Some(seed) => {
            debug!("deriving digest from seed");
            hasher.update(b"seed:");
            hasher.update(seed.as_bytes());
        }
        None => {
            let count = COUNTER.fetch_add(1, Ordering::Relaxed);
            hasher.update(b"random:");
            hasher.update(&Ulid::new().to_bytes());
            hasher.update(&count.to_be_bytes());
        }
    }

    hasher.finalize().to_hex().to_string()
}
