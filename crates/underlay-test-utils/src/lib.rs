//! Instrumented element types for underlay development.
//!
//! Provides [`Tracked`], a deliberately non-trivial element type that
//! counts clones and drops through a shared [`Instrumentation`] handle and
//! can be armed to panic on its nth clone. Tests use it to verify that the
//! per-slot construction path clones exactly once per slot and rolls back
//! the constructed prefix when a clone panics.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use underlay_core::{Construct, PerSlot};

/// Shared clone/drop accounting for a family of [`Tracked`] values.
///
/// Cheap to clone (an `Arc` handle); every `Tracked` created from it
/// reports into the same counters.
#[derive(Clone, Debug, Default)]
pub struct Instrumentation(Arc<Counters>);

#[derive(Debug, Default)]
struct Counters {
    clones: AtomicUsize,
    drops: AtomicUsize,
    /// 1-based clone index that panics; 0 means never.
    panic_at: AtomicUsize,
}

impl Instrumentation {
    /// Total number of clone attempts so far, including a panicking one.
    pub fn clones(&self) -> usize {
        self.0.clones.load(Ordering::SeqCst)
    }

    /// Total number of `Tracked` values dropped so far.
    pub fn drops(&self) -> usize {
        self.0.drops.load(Ordering::SeqCst)
    }

    /// Arm the nth clone (1-based) to panic instead of producing a value.
    pub fn panic_at_clone(&self, nth: usize) {
        self.0.panic_at.store(nth, Ordering::SeqCst);
    }
}

/// A non-trivially-constructible element type with observable lifecycle.
///
/// Classified [`PerSlot`], so the construction algorithms must clone it
/// into every destination slot individually.
#[derive(Debug)]
pub struct Tracked {
    value: i32,
    stats: Instrumentation,
}

impl Tracked {
    /// A tracked value reporting into `stats`.
    pub fn new(value: i32, stats: &Instrumentation) -> Self {
        Self {
            value,
            stats: stats.clone(),
        }
    }

    /// A tracked value whose family panics on the nth clone (1-based).
    pub fn panic_at_clone(value: i32, stats: &Instrumentation, nth: usize) -> Self {
        stats.panic_at_clone(nth);
        Self::new(value, stats)
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let n = self.stats.0.clones.fetch_add(1, Ordering::SeqCst) + 1;
        let panic_at = self.stats.0.panic_at.load(Ordering::SeqCst);
        if panic_at != 0 && n == panic_at {
            panic!("Tracked: clone {n} armed to panic");
        }
        Self {
            value: self.value,
            stats: self.stats.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.stats.0.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialEq<i32> for Tracked {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}

// Cloning is the only correct way to duplicate a Tracked (the counters must
// see it), which is exactly what the per-slot classification promises.
unsafe impl Construct for Tracked {
    type Strategy = PerSlot;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_and_drop_are_counted() {
        let stats = Instrumentation::default();
        let a = Tracked::new(1, &stats);
        let b = a.clone();
        assert_eq!(stats.clones(), 1);
        drop(a);
        drop(b);
        assert_eq!(stats.drops(), 2);
    }

    #[test]
    fn armed_clone_panics_at_the_requested_index() {
        let stats = Instrumentation::default();
        let a = Tracked::panic_at_clone(1, &stats, 2);
        let _b = a.clone();
        let result = std::panic::catch_unwind(|| a.clone());
        assert!(result.is_err());
        assert_eq!(stats.clones(), 2);
    }
}
