//! Strategy tags: the compile-time selector consumed by the dispatchers.
//!
//! A tag is an empty unit type named by [`Construct::Strategy`]. It exists
//! only during trait resolution — no value of a tag type is ever created,
//! and the selected strategy leaves no trace in the compiled code beyond
//! the implementation it picked.
//!
//! The tag set is sealed. Every classifiable element type must resolve to
//! exactly one of the three tags; an unclassified type is a trait-bound
//! error at the call site, never a runtime condition.
//!
//! [`Construct::Strategy`]: crate::Construct::Strategy

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Bitwise {}
    impl Sealed for super::BytewiseMove {}
    impl Sealed for super::PerSlot {}
}

/// Marker trait implemented by the three strategy tags and nothing else.
///
/// Bounds [`Construct::Strategy`](crate::Construct::Strategy) so that a
/// classification can only ever name a real tag.
pub trait Tag: sealed::Sealed {}

/// Bulk path: the element is trivially copyable.
///
/// Fills become a bulk slice fill and copies a single non-overlapping
/// bitwise copy of the whole range. Requires `T: Copy`; an `unsafe impl
/// Construct` naming this tag asserts that a bitwise copy of `T` is
/// observably identical to clone-constructing it.
pub struct Bitwise;

/// Character fast path: bulk like [`Bitwise`], but copies are overlap-safe.
///
/// Reserved for the narrow (`u8`) and wide (`char`) character types, whose
/// buffer use sites may alias (e.g. shifting a string's contents within its
/// own backing storage). Copies compile to a single `memmove`-style byte
/// move instead of a non-overlapping copy.
pub struct BytewiseMove;

/// Per-slot path: the element has non-trivial construction semantics.
///
/// Every destination slot is constructed individually by cloning the source
/// value into place. This is the correct classification for any `Clone`
/// type that owns resources (`String`, `Vec<T>`, `Arc<T>`, ...).
pub struct PerSlot;

impl Tag for Bitwise {}
impl Tag for BytewiseMove {}
impl Tag for PerSlot {}
