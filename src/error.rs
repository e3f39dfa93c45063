//! Error kinds for the similarity core.
//!
//! The core does not retry and does not attempt partial recovery: an
//! invalid configuration, an allocation failure, or an internal invariant
//! violation are all unrecoverable for the current run. Callers (the `sim`
//! binary's `main`) treat every variant as fatal: print to stderr, exit 1.
//! No external error crate is used here, matching the teacher's own
//! `Box<dyn std::error::Error>` + string-error posture (`src/util.rs`,
//! `src/walk.rs`) — this enum exists only because spec.md calls for three
//! *distinguishable* fatal kinds, which a bare string cannot express.
use std::error::Error;
use std::fmt;

/// Fatal error raised by the similarity core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An invalid parameter was supplied (e.g. `min_run_size == 0`,
    /// `threshold_percentage` outside `1..=100`). Reported before any
    /// work begins.
    Configuration(String),
    /// Allocation failed for a structure other than the hash table (the
    /// hash table itself degrades through the prime schedule instead).
    Resource(String),
    /// An internal invariant was violated: an out-of-range query, a hash
    /// table undersized past the smallest schedule entry, or a detected
    /// forward-reference chain cycle. Carries a short diagnostic tag
    /// identifying which invariant failed.
    InternalInvariant { tag: &'static str, detail: String },
}

impl CoreError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        CoreError::Configuration(msg.into())
    }

    pub fn resource(msg: impl Into<String>) -> Self {
        CoreError::Resource(msg.into())
    }

    pub fn internal(tag: &'static str, detail: impl Into<String>) -> Self {
        CoreError::InternalInvariant {
            tag,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            CoreError::Resource(msg) => write!(f, "resource error: {msg}"),
            CoreError::InternalInvariant { tag, detail } => {
                write!(f, "internal invariant violation [{tag}]: {detail}")
            }
        }
    }
}

impl Error for CoreError {}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
