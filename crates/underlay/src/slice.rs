//! Safe wrappers over `&mut [MaybeUninit<T>]` destination storage.
//!
//! The idiomatic Rust spelling of "allocated but unconstructed" is a slice
//! of `MaybeUninit<T>`. This module lets container code use the
//! dispatchers without writing `unsafe`: the slice borrows prove the
//! storage is owned and in bounds, leaving only shape checks, which are
//! reported through [`FillError`].
//!
//! Each operation returns the initialized region as `&mut [T]`. The
//! elements are live from that point on; it is the caller's storage, so
//! the caller decides when they are dropped (a container typically adopts
//! them into its tracked length).

use std::mem::MaybeUninit;

use crate::error::FillError;
use crate::raw;
use crate::strategy::Fillable;

/// Construct a copy of `value` in every slot of `dst`, returning the now
/// initialized slice.
///
/// An empty `dst` is a no-op returning an empty slice.
pub fn fill<'a, T: Fillable>(dst: &'a mut [MaybeUninit<T>], value: &T) -> &'a mut [T] {
    let len = dst.len();
    let first = dst.as_mut_ptr().cast::<T>();
    // SAFETY: the borrow guarantees [first, first + len) is an owned,
    // aligned range; MaybeUninit slots are unconstructed by type. A
    // panicking clone rolls the range back to unconstructed, matching the
    // untouched MaybeUninit state.
    unsafe {
        if len > 0 {
            raw::fill(first, first.add(len), value);
        }
        std::slice::from_raw_parts_mut(first, len)
    }
}

/// Construct `n` copies of `value` in the first `n` slots of `dst`.
///
/// Returns the initialized prefix and the untouched tail, or
/// [`FillError::OutOfRoom`] if `dst` has fewer than `n` slots.
pub fn fill_n<'a, T: Fillable>(
    dst: &'a mut [MaybeUninit<T>],
    n: usize,
    value: &T,
) -> Result<(&'a mut [T], &'a mut [MaybeUninit<T>]), FillError> {
    if n > dst.len() {
        return Err(FillError::OutOfRoom {
            requested: n,
            capacity: dst.len(),
        });
    }
    let (head, tail) = dst.split_at_mut(n);
    let first = head.as_mut_ptr().cast::<T>();
    // SAFETY: head is an owned range of exactly n unconstructed slots.
    unsafe {
        raw::fill_n(first, n, value);
        Ok((std::slice::from_raw_parts_mut(first, n), tail))
    }
}

/// Construct a copy of each element of `src` in the corresponding slot of
/// `dst`, returning the initialized slice.
///
/// Returns [`FillError::LengthMismatch`] if the lengths differ. Empty
/// slices are a no-op.
pub fn copy_from<'a, T: Fillable>(
    src: &[T],
    dst: &'a mut [MaybeUninit<T>],
) -> Result<&'a mut [T], FillError> {
    if src.len() != dst.len() {
        return Err(FillError::LengthMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    let len = dst.len();
    let first = dst.as_mut_ptr().cast::<T>();
    // SAFETY: src's elements are live by the shared borrow; dst is an
    // owned range of len unconstructed slots; the borrows cannot overlap.
    unsafe {
        if len > 0 {
            let range = src.as_ptr_range();
            raw::copy(range.start, range.end, first);
        }
        Ok(std::slice::from_raw_parts_mut(first, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ptr;
    use underlay_test_utils::{Instrumentation, Tracked};

    fn storage<T>(n: usize) -> Box<[MaybeUninit<T>]> {
        Box::new_uninit_slice(n)
    }

    #[test]
    fn fill_initializes_every_slot() {
        let mut dst = storage::<u64>(16);
        let built = fill(&mut dst, &99);
        assert_eq!(built.len(), 16);
        assert!(built.iter().all(|&v| v == 99));
    }

    #[test]
    fn fill_n_splits_prefix_and_tail() {
        let mut dst = storage::<u32>(10);
        let (built, rest) = fill_n(&mut dst, 4, &7).unwrap();
        assert_eq!(built, [7, 7, 7, 7]);
        assert_eq!(rest.len(), 6);
    }

    #[test]
    fn fill_n_rejects_oversized_requests() {
        let mut dst = storage::<u32>(3);
        assert_eq!(
            fill_n(&mut dst, 5, &7).unwrap_err(),
            FillError::OutOfRoom {
                requested: 5,
                capacity: 3,
            }
        );
    }

    #[test]
    fn fill_n_zero_builds_nothing() {
        let stats = Instrumentation::default();
        let value = Tracked::new(1, &stats);
        let mut dst = storage::<Tracked>(3);
        let (built, rest) = fill_n(&mut dst, 0, &value).unwrap();
        assert!(built.is_empty());
        assert_eq!(rest.len(), 3);
        assert_eq!(stats.clones(), 0);
    }

    #[test]
    fn copy_from_round_trips_strings() {
        let src = vec![String::from("a"), String::from("bb"), String::from("ccc")];
        let mut dst = storage::<String>(3);
        let built = copy_from(&src, &mut dst).unwrap();
        assert_eq!(built, src.as_slice());
        unsafe { ptr::drop_in_place(built as *mut [String]) };
    }

    #[test]
    fn copy_from_rejects_length_mismatch() {
        let src = [1u64, 2, 3];
        let mut dst = storage::<u64>(5);
        assert_eq!(
            copy_from(&src, &mut dst),
            Err(FillError::LengthMismatch { src: 3, dst: 5 })
        );
    }

    #[test]
    fn fill_with_non_trivial_value() {
        let mut dst = storage::<String>(3);
        let built = fill(&mut dst, &String::from("ab"));
        assert_eq!(built, ["ab", "ab", "ab"]);
        unsafe { ptr::drop_in_place(built as *mut [String]) };
    }

    #[test]
    fn panicking_clone_leaves_storage_reusable() {
        let stats = Instrumentation::default();
        let value = Tracked::panic_at_clone(5, &stats, 2);
        let mut dst = storage::<Tracked>(4);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = fill(&mut dst, &value);
        }));
        assert!(result.is_err());
        // One element was constructed before the panic and was rolled back.
        assert_eq!(stats.drops(), 1);
        // The storage is unconstructed again; a fresh fill must succeed.
        stats.panic_at_clone(0);
        let built = fill(&mut dst, &value);
        assert_eq!(built.len(), 4);
        unsafe { ptr::drop_in_place(built as *mut [Tracked]) };
    }

    proptest! {
        #[test]
        fn fill_n_reads_back_n_copies(n in 0usize..64, cap in 0usize..64, x: u64) {
            let mut dst = storage::<u64>(cap);
            match fill_n(&mut dst, n, &x) {
                Ok((built, rest)) => {
                    prop_assert!(n <= cap);
                    prop_assert_eq!(built.len(), n);
                    prop_assert_eq!(rest.len(), cap - n);
                    prop_assert!(built.iter().all(|&v| v == x));
                }
                Err(FillError::OutOfRoom { requested, capacity }) => {
                    prop_assert!(n > cap);
                    prop_assert_eq!(requested, n);
                    prop_assert_eq!(capacity, cap);
                }
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
            }
        }

        #[test]
        fn copy_round_trips_arbitrary_sequences(src in proptest::collection::vec(any::<u64>(), 0..64)) {
            let mut dst = storage::<u64>(src.len());
            let built = copy_from(&src, &mut dst).unwrap();
            prop_assert_eq!(built, src.as_slice());
        }

        #[test]
        fn byte_buffer_shift_matches_unaliased_copy(
            data in proptest::collection::vec(any::<u8>(), 1..32),
            shift in 1usize..8,
        ) {
            // Shifting a buffer's contents right by `shift` within the same
            // backing array must read as if copied through a temporary.
            let len = data.len();
            let mut buf = vec![0u8; len + shift];
            buf[..len].copy_from_slice(&data);
            let expected: Vec<u8> = buf[..shift].iter().chain(data.iter()).copied().collect();
            unsafe {
                let base = buf.as_mut_ptr();
                raw::copy(base.cast_const(), base.cast_const().add(len), base.add(shift));
            }
            prop_assert_eq!(buf, expected);
        }
    }
}
