//! Per-route selection cursor.
//!
//! The cursor is the only mutable state a route carries. Every operation on it
//! is a single atomic step, so concurrent requests on the same route never
//! observe a torn or duplicated index.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Zero-based index into a route's response sequence.
#[derive(Debug, Default)]
pub struct Cursor {
    index: AtomicUsize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index.
    pub fn get(&self) -> usize {
        self.index.load(Ordering::Acquire)
    }

    /// Return the current index and move forward by one, stopping at `last`.
    ///
    /// Concurrent callers each receive a distinct index until `last` is
    /// reached; from then on every caller receives `last`.
    pub fn advance_saturating(&self, last: usize) -> usize {
        let mut current = self.index.load(Ordering::Acquire);
        loop {
            if current >= last {
                return current;
            }
            match self.index.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return current,
                Err(actual) => current = actual,
            }
        }
    }

    /// Point the cursor at `index`.
    pub fn set(&self, index: usize) {
        self.index.store(index, Ordering::Release);
    }

    /// Rewind to the first entry.
    pub fn reset(&self) {
        self.set(0);
    }
}
