//! The [`Construct`] trait: how an element type declares its classification.
//!
//! Implementations for the common std element types are seeded at the bottom
//! of this module. The two macros keep the flat primitive lists readable and
//! are exported for container authors classifying their own types.

use crate::tag::{Bitwise, BytewiseMove, PerSlot, Tag};

/// Compile-time classification of an element type for raw-storage
/// construction.
///
/// The associated [`Strategy`](Construct::Strategy) names one of the three
/// [tags](crate::tag); the `underlay` dispatchers resolve it to either the
/// bulk or the per-slot implementation with zero runtime cost.
///
/// # Safety
///
/// Naming [`Bitwise`] or [`BytewiseMove`] asserts that a bitwise copy of a
/// value of this type is observably identical to clone-constructing it, and
/// that dropping a bitwise copy alongside the original is sound. In
/// practice this means the type is `Copy` with no interior pointers into
/// itself. [`PerSlot`] makes no such claim and is always a sound (if
/// conservative) classification for a `Clone` type.
pub unsafe trait Construct: Sized {
    /// The strategy tag selecting the construction implementation.
    type Strategy: Tag;
}

/// Classifies each listed type as [`Bitwise`]: trivially copyable, bulk
/// fill/copy permitted.
///
/// The impl produced is `unsafe`; listing a type here carries the safety
/// obligation documented on [`Construct`].
#[macro_export]
macro_rules! bitwise_elements {
    ($($ty:ty),* $(,)?) => {
        $(
            unsafe impl $crate::Construct for $ty {
                type Strategy = $crate::Bitwise;
            }
        )*
    };
}

/// Classifies each listed type as [`PerSlot`]: constructed one slot at a
/// time by cloning.
#[macro_export]
macro_rules! per_slot_elements {
    ($($ty:ty),* $(,)?) => {
        $(
            unsafe impl $crate::Construct for $ty {
                type Strategy = $crate::PerSlot;
            }
        )*
    };
}

// Primitive scalars replicate correctly as raw bytes. `u8` and `char` are
// deliberately absent: they take the character fast path below.
bitwise_elements!(
    u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool,
);

// The narrow and wide character types. Their copies must tolerate aliased
// source and destination ranges (in-buffer shifts), so they get the
// overlap-safe tag rather than plain `Bitwise`.
unsafe impl Construct for u8 {
    type Strategy = BytewiseMove;
}
unsafe impl Construct for char {
    type Strategy = BytewiseMove;
}

// Shared references and raw pointers are word-sized `Copy` values.
unsafe impl<'a, T: ?Sized> Construct for &'a T {
    type Strategy = Bitwise;
}
unsafe impl<T: ?Sized> Construct for *const T {
    type Strategy = Bitwise;
}
unsafe impl<T: ?Sized> Construct for *mut T {
    type Strategy = Bitwise;
}

// An array is exactly as trivial as its element type. Inheriting the
// element's tag keeps `[u64; 4]` on the bulk path while `[String; 4]`
// stays per-slot.
unsafe impl<T: Construct, const N: usize> Construct for [T; N] {
    type Strategy = T::Strategy;
}

// Resource-owning std types: cloning is the only correct way to produce an
// independent value, so every slot is constructed individually.
per_slot_elements!(String);

unsafe impl<T> Construct for Vec<T> {
    type Strategy = PerSlot;
}
unsafe impl<T: ?Sized> Construct for Box<T> {
    type Strategy = PerSlot;
}
unsafe impl<T: ?Sized> Construct for std::sync::Arc<T> {
    type Strategy = PerSlot;
}
unsafe impl<T: ?Sized> Construct for std::rc::Rc<T> {
    type Strategy = PerSlot;
}
unsafe impl<T> Construct for Option<T> {
    type Strategy = PerSlot;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn strategy_of<T: Construct>() -> TypeId
    where
        T::Strategy: 'static,
    {
        TypeId::of::<T::Strategy>()
    }

    #[test]
    fn scalars_are_bitwise() {
        assert_eq!(strategy_of::<u64>(), TypeId::of::<Bitwise>());
        assert_eq!(strategy_of::<i32>(), TypeId::of::<Bitwise>());
        assert_eq!(strategy_of::<f64>(), TypeId::of::<Bitwise>());
        assert_eq!(strategy_of::<bool>(), TypeId::of::<Bitwise>());
    }

    #[test]
    fn character_types_take_the_fast_path() {
        assert_eq!(strategy_of::<u8>(), TypeId::of::<BytewiseMove>());
        assert_eq!(strategy_of::<char>(), TypeId::of::<BytewiseMove>());
    }

    #[test]
    fn owning_types_are_per_slot() {
        assert_eq!(strategy_of::<String>(), TypeId::of::<PerSlot>());
        assert_eq!(strategy_of::<Vec<u32>>(), TypeId::of::<PerSlot>());
        assert_eq!(strategy_of::<Option<String>>(), TypeId::of::<PerSlot>());
    }

    #[test]
    fn arrays_inherit_their_element_classification() {
        assert_eq!(strategy_of::<[u64; 4]>(), TypeId::of::<Bitwise>());
        assert_eq!(strategy_of::<[u8; 4]>(), TypeId::of::<BytewiseMove>());
        assert_eq!(strategy_of::<[String; 4]>(), TypeId::of::<PerSlot>());
    }

    #[test]
    fn references_are_bitwise() {
        assert_eq!(strategy_of::<&'static str>(), TypeId::of::<Bitwise>());
        assert_eq!(strategy_of::<*const u64>(), TypeId::of::<Bitwise>());
    }
}
