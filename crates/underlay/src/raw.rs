//! Stage-1 dispatchers over raw pointers.
//!
//! These are the three public operations of the crate (plus the counted
//! copy variant), each a thin generic shim: look up the element's
//! [`Construct::Strategy`](underlay_core::Construct::Strategy) tag and
//! forward to that tag's [`FillStrategy`] implementation. The lookup is
//! trait resolution during monomorphisation — by the time code runs, each
//! call site *is* its bulk or per-slot implementation.
//!
//! # Common contract
//!
//! This module never allocates, owns, or frees memory; it writes into
//! ranges whose storage lifetime is entirely the caller's responsibility.
//! For every operation:
//!
//! - destination slots must be allocated, properly aligned for `T`, and
//!   must NOT hold live elements — constructing into a live slot is
//!   undefined behavior;
//! - `T` must not be zero-sized for the range-based operations (`fill`,
//!   `copy`), whose length is derived from pointer distance;
//! - if a clone panics mid-operation, the elements constructed so far by
//!   that call are dropped before the panic propagates (see
//!   [`strategy`](crate::strategy)).

use crate::strategy::{FillStrategy, Fillable};

/// Construct `n` copies of `value` at `dst`, returning `dst + n`.
///
/// `n == 0` is a no-op returning `dst` unchanged.
///
/// # Safety
///
/// `dst` must point at `n` contiguous, aligned, unconstructed slots within
/// a single allocation (see the [module contract](self)).
pub unsafe fn fill_n<T: Fillable>(dst: *mut T, n: usize, value: &T) -> *mut T {
    // SAFETY: forwarded contract.
    unsafe { <T::Strategy as FillStrategy<T>>::fill_n(dst, n, value) }
}

/// Construct a copy of `value` at every slot of `[first, last)`.
///
/// `first == last` is a no-op.
///
/// # Safety
///
/// `[first, last)` must be a valid range of aligned, unconstructed slots
/// within a single allocation, and `T` must not be zero-sized (see the
/// [module contract](self)).
pub unsafe fn fill<T: Fillable>(first: *mut T, last: *mut T, value: &T) {
    // SAFETY: forwarded contract.
    unsafe { <T::Strategy as FillStrategy<T>>::fill_range(first, last, value) }
}

/// Construct, at successive slots starting at `dst`, a copy of each
/// element of `[first, last)` in source order; returns `dst` advanced by
/// the range length.
///
/// `first == last` is a no-op returning `dst` unchanged.
///
/// # Safety
///
/// `[first, last)` must hold live elements, `dst` must point at as many
/// aligned, unconstructed slots, and `T` must not be zero-sized. Source
/// and destination may overlap only when `T`'s classification is
/// [`BytewiseMove`](underlay_core::BytewiseMove) (the character fast
/// path); for any other classification overlap is undefined behavior and
/// is not guarded against.
pub unsafe fn copy<T: Fillable>(first: *const T, last: *const T, dst: *mut T) -> *mut T {
    // SAFETY: forwarded contract.
    unsafe { <T::Strategy as FillStrategy<T>>::copy_range(first, last, dst) }
}

/// Counted variant of [`copy`]: construct copies of the `n` elements
/// starting at `first`, returning `dst + n`.
///
/// # Safety
///
/// As for [`copy`], with the source range expressed as `first` plus a
/// count of live elements.
pub unsafe fn copy_n<T: Fillable>(first: *const T, n: usize, dst: *mut T) -> *mut T {
    // SAFETY: [first, first + n) is the caller's live source range.
    unsafe { copy(first, first.add(n), dst) }
}
