//! Compile-time element classification for the underlay construction algorithms.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! question the rest of the workspace asks about every element type it
//! constructs: *may this type be written into raw storage with a bulk
//! bitwise operation, or does every slot need an individual clone?*
//!
//! The answer is carried entirely in the type system. An element type
//! implements [`Construct`] and names one of three [strategy tags](tag) as
//! its [`Construct::Strategy`]. The tags are empty unit types with no
//! runtime representation; the `underlay` crate resolves them to concrete
//! fill/copy implementations during monomorphisation, so the choice between
//! the bulk and per-slot paths costs nothing at runtime and involves no
//! branch.
//!
//! Classifications for the std element types containers are usually built
//! from are seeded here. Container authors classify their own element types
//! with an `unsafe impl Construct`, or via the [`bitwise_elements!`] /
//! [`per_slot_elements!`] macros.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod construct;
pub mod tag;

pub use construct::Construct;
pub use tag::{Bitwise, BytewiseMove, PerSlot, Tag};
