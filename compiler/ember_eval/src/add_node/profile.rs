//! Per-node dispatch counters.
//!
//! The adaptive state never changes results, so these counters are how a
//! caller (or a test) sees whether a site stays on its fast path.

use std::sync::atomic::{AtomicU64, Ordering};

/// Which path produced a call's outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Path {
    Integer,
    BigNumber,
    String,
    TypeError,
}

/// Relaxed counters, updated on every evaluation.
#[derive(Debug, Default)]
pub struct DispatchProfile {
    integer: AtomicU64,
    big_number: AtomicU64,
    string: AtomicU64,
    type_errors: AtomicU64,
    slow_path: AtomicU64,
    transitions: AtomicU64,
}

impl DispatchProfile {
    pub(crate) fn record_path(&self, path: Path) {
        let counter = match path {
            Path::Integer => &self.integer,
            Path::BigNumber => &self.big_number,
            Path::String => &self.string,
            Path::TypeError => &self.type_errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_slow_path(&self) {
        self.slow_path.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_transition(&self) {
        self.transitions.fetch_add(1, Ordering::Relaxed);
    }

    /// Read every counter.
    ///
    /// Counters are read one at a time, so a snapshot taken while other
    /// threads evaluate the node may be slightly inconsistent.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            integer_fast_path: self.integer.load(Ordering::Relaxed),
            big_number_path: self.big_number.load(Ordering::Relaxed),
            string_path: self.string.load(Ordering::Relaxed),
            type_errors: self.type_errors.load(Ordering::Relaxed),
            slow_path_entries: self.slow_path.load(Ordering::Relaxed),
            transitions: self.transitions.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of a node's counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    /// Calls answered by the small-integer path.
    pub integer_fast_path: u64,
    /// Calls answered by the arbitrary-precision path.
    pub big_number_path: u64,
    /// Calls answered by string concatenation.
    pub string_path: u64,
    /// Calls that ended in a type error.
    pub type_errors: u64,
    /// Calls whose committed path did not apply and had to re-dispatch.
    pub slow_path_entries: u64,
    /// State or exclusion-flag changes this node published.
    pub transitions: u64,
}

impl ProfileSnapshot {
    /// Total number of evaluations.
    pub fn evaluations(&self) -> u64 {
        self.integer_fast_path
            .saturating_add(self.big_number_path)
            .saturating_add(self.string_path)
            .saturating_add(self.type_errors)
    }
}
