//! Stage-2 construction strategies, one per classification tag.
//!
//! [`FillStrategy`] is the seam between the classification in
//! `underlay-core` and the actual memory operations. Each of the three tags
//! implements it once:
//!
//! - [`Bitwise`] (`T: Copy`) — bulk slice fill, non-overlapping bulk copy.
//! - [`BytewiseMove`] (`T: Copy`) — same fills, but the copy is a single
//!   overlap-safe byte move for the character types.
//! - [`PerSlot`] (`T: Clone`) — clones into one slot at a time behind an
//!   unwind guard.
//!
//! The trait is sealed: the tag set is closed in `underlay-core`, and the
//! strategies here are the only implementations that will ever exist. A
//! type whose classification does not satisfy its strategy's bound (say,
//! a non-`Copy` type classified [`Bitwise`]) fails trait resolution at the
//! call site — misclassification is a compile error, not a runtime state.

use std::mem::MaybeUninit;
use std::ptr;

use underlay_core::{Bitwise, BytewiseMove, Construct, PerSlot};

mod sealed {
    use underlay_core::{Bitwise, BytewiseMove, PerSlot};

    pub trait Sealed {}
    impl Sealed for Bitwise {}
    impl Sealed for BytewiseMove {}
    impl Sealed for PerSlot {}
}

/// A stage-2 construction implementation, selected by a strategy tag.
///
/// All methods share the contract of the [`raw`](crate::raw) dispatchers
/// that forward to them; see each dispatcher for the full safety
/// obligations. In brief: destination slots must be allocated, aligned and
/// unconstructed, source elements (for copies) must be live, and `T` must
/// not be zero-sized for the range-based operations.
pub trait FillStrategy<T: Clone>: sealed::Sealed {
    /// Construct `n` copies of `value` starting at `dst`; returns `dst + n`.
    ///
    /// # Safety
    ///
    /// `dst` must point at `n` contiguous unconstructed slots.
    unsafe fn fill_n(dst: *mut T, n: usize, value: &T) -> *mut T;

    /// Construct a copy of `value` at every slot of `[first, last)`.
    ///
    /// # Safety
    ///
    /// `[first, last)` must be a valid range of unconstructed slots within
    /// one allocation, and `T` must not be zero-sized.
    unsafe fn fill_range(first: *mut T, last: *mut T, value: &T);

    /// Construct a copy of each element of `[first, last)` at successive
    /// slots starting at `dst`; returns `dst` advanced by the range length.
    ///
    /// # Safety
    ///
    /// `[first, last)` must hold live elements, `dst` must point at as many
    /// unconstructed slots, and `T` must not be zero-sized. Overlap between
    /// source and destination is permitted only for [`BytewiseMove`].
    unsafe fn copy_range(first: *const T, last: *const T, dst: *mut T) -> *mut T;
}

/// An element type the dispatchers can construct: classified, cloneable,
/// and with a strategy implementation for its tag.
///
/// Blanket-implemented; never implement it by hand. Bounding on `Fillable`
/// is how container code asks for "anything these algorithms accept".
pub trait Fillable: Construct<Strategy: FillStrategy<Self>> + Clone {}

impl<T> Fillable for T
where
    T: Construct + Clone,
    T::Strategy: FillStrategy<T>,
{
}

/// Number of elements in `[first, last)`.
///
/// # Safety
///
/// Both pointers must derive from the same allocation with
/// `first <= last`, and `T` must not be zero-sized.
unsafe fn range_len<T>(first: *const T, last: *const T) -> usize {
    debug_assert!(std::mem::size_of::<T>() != 0);
    // SAFETY: upheld by the caller; the distance is non-negative.
    unsafe { last.offset_from(first) as usize }
}

impl<T: Copy> FillStrategy<T> for Bitwise {
    unsafe fn fill_n(dst: *mut T, n: usize, value: &T) -> *mut T {
        // SAFETY: the caller provides n contiguous slots; viewing
        // unconstructed storage as MaybeUninit<T> is always valid.
        let slots = unsafe { std::slice::from_raw_parts_mut(dst.cast::<MaybeUninit<T>>(), n) };
        slots.fill(MaybeUninit::new(*value));
        // SAFETY: n slots were just written, so dst + n stays in bounds.
        unsafe { dst.add(n) }
    }

    unsafe fn fill_range(first: *mut T, last: *mut T, value: &T) {
        // SAFETY: [first, last) is a valid non-ZST range per the contract.
        let n = unsafe { range_len(first.cast_const(), last.cast_const()) };
        // SAFETY: same range, expressed as start + count.
        unsafe { Self::fill_n(first, n, value) };
    }

    unsafe fn copy_range(first: *const T, last: *const T, dst: *mut T) -> *mut T {
        // SAFETY: [first, last) is a valid non-ZST range per the contract.
        let n = unsafe { range_len(first, last) };
        // SAFETY: the caller guarantees n unconstructed destination slots
        // and, for this strategy, no overlap with the source.
        unsafe {
            ptr::copy_nonoverlapping(first, dst, n);
            dst.add(n)
        }
    }
}

impl<T: Copy> FillStrategy<T> for BytewiseMove {
    unsafe fn fill_n(dst: *mut T, n: usize, value: &T) -> *mut T {
        // Fills cannot alias anything live; reuse the plain bulk fill.
        // SAFETY: identical contract.
        unsafe { <Bitwise as FillStrategy<T>>::fill_n(dst, n, value) }
    }

    unsafe fn fill_range(first: *mut T, last: *mut T, value: &T) {
        // SAFETY: identical contract.
        unsafe { <Bitwise as FillStrategy<T>>::fill_range(first, last, value) }
    }

    unsafe fn copy_range(first: *const T, last: *const T, dst: *mut T) -> *mut T {
        // SAFETY: [first, last) is a valid non-ZST range per the contract.
        let n = unsafe { range_len(first, last) };
        // SAFETY: ptr::copy tolerates overlapping ranges, which is the
        // point of this strategy — character buffers shift within
        // themselves.
        unsafe {
            ptr::copy(first, dst, n);
            dst.add(n)
        }
    }
}

impl<T: Clone> FillStrategy<T> for PerSlot {
    unsafe fn fill_n(dst: *mut T, n: usize, value: &T) -> *mut T {
        let mut guard = PrefixGuard::new(dst);
        for _ in 0..n {
            // SAFETY: the cursor stays within the n slots the caller
            // provided, each of which is unconstructed.
            unsafe {
                guard.cur.write(value.clone());
                guard.cur = guard.cur.add(1);
            }
        }
        guard.commit()
    }

    unsafe fn fill_range(first: *mut T, last: *mut T, value: &T) {
        let mut guard = PrefixGuard::new(first);
        while guard.cur != last {
            // SAFETY: the cursor advances one slot at a time and stops at
            // last, so it never leaves the caller's range.
            unsafe {
                guard.cur.write(value.clone());
                guard.cur = guard.cur.add(1);
            }
        }
        guard.commit();
    }

    unsafe fn copy_range(first: *const T, last: *const T, dst: *mut T) -> *mut T {
        let mut guard = PrefixGuard::new(dst);
        let mut src = first;
        while src != last {
            // SAFETY: src walks the live source elements; the destination
            // cursor advances in lockstep through the caller's slots.
            unsafe {
                guard.cur.write((*src).clone());
                guard.cur = guard.cur.add(1);
                src = src.add(1);
            }
        }
        guard.commit()
    }
}

/// Unwind guard for the per-slot loops.
///
/// If a clone panics mid-loop, the destination holds a partially
/// constructed prefix `[first, cur)` that no owner knows about. Dropping
/// the guard during unwind destroys exactly that prefix, returning the
/// range to the fully unconstructed state the caller handed in.
struct PrefixGuard<T> {
    first: *mut T,
    cur: *mut T,
}

impl<T> PrefixGuard<T> {
    fn new(first: *mut T) -> Self {
        Self { first, cur: first }
    }

    /// Construction finished; the elements now belong to the caller.
    fn commit(self) -> *mut T {
        let cur = self.cur;
        std::mem::forget(self);
        cur
    }
}

impl<T> Drop for PrefixGuard<T> {
    fn drop(&mut self) {
        // SAFETY: every slot in [first, cur) was constructed by this call
        // and has not been handed to the caller.
        unsafe {
            let len = self.cur.offset_from(self.first) as usize;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.first, len));
        }
    }
}
