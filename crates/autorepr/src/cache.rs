//! The per-instance representation cache.
//!
//! Every augmented instance owns exactly one [`ReprCache`]. A wrapped
//! constructor primes it with the captured call expression before the
//! instance reaches the caller; from then on the cell is immutable and
//! rendering returns the stored string without recomputation, regardless of
//! later field mutation.

use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;
use thiserror::Error;

/// Failure surface of [`ReprCache::prime`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// The cache was already primed; the first value is kept.
    #[error("instance representation already captured")]
    AlreadyCaptured,
}

/// A set-once slot holding the captured call expression of one instance.
///
/// The slot starts empty, is primed exactly once, and never changes
/// afterwards. Priming an already-primed cache keeps the first value and
/// reports [`CaptureError::AlreadyCaptured`], which is what makes a
/// double-wrapped constructor harmless rather than a silent re-capture.
///
/// Cloning carries the stored string verbatim: a clone is not a constructor
/// call, so nothing is re-captured.
#[derive(Clone, Default)]
pub struct ReprCache(OnceCell<String>);

impl ReprCache {
    /// An empty, unprimed cache. Constructors wrapped by `#[augment]` prime
    /// it before the instance escapes.
    pub const fn new() -> Self {
        Self(OnceCell::new())
    }

    /// Store the captured call expression. First write wins.
    pub fn prime(&self, rendered: String) -> Result<(), CaptureError> {
        self.0.set(rendered).map_err(|_| {
            log::debug!("instance representation already captured; keeping the first");
            CaptureError::AlreadyCaptured
        })
    }

    /// The stored call expression, or `None` when the instance was built
    /// around the wrapped constructors (struct literal, `Default`, ...).
    pub fn rendered(&self) -> Option<&str> {
        self.0.get().map(String::as_str)
    }

    pub fn is_primed(&self) -> bool {
        self.0.get().is_some()
    }
}

// The cache is presentation metadata, not part of the value. It compares
// equal to any other cache and hashes to nothing, so a derived
// PartialEq/Hash on the owning struct reflects the author's fields only.
impl PartialEq for ReprCache {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ReprCache {}

impl Hash for ReprCache {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl fmt::Debug for ReprCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some(rendered) => f.debug_tuple("ReprCache").field(rendered).finish(),
            None => f.write_str("ReprCache(<unprimed>)"),
        }
    }
}
