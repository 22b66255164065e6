//! Uninitialized-memory construction algorithms for container implementations.
//!
//! Container types that separate allocation from object construction
//! (vectors, strings, arenas) all face the same problem: populate a
//! contiguous range of allocated-but-unconstructed storage, using a bulk
//! bitwise operation when the element type permits it and an element-by-
//! element in-place construction when it does not — without the caller
//! having to know which. This crate is that layer.
//!
//! # Architecture
//!
//! ```text
//! slice (safe MaybeUninit wrappers, shape errors via FillError)
//! └── raw (stage 1: unsafe pointer dispatchers — fill_n / fill / copy / copy_n)
//!     └── strategy (stage 2: FillStrategy impls per tag)
//!         ├── Bitwise      → bulk slice fill / copy_nonoverlapping
//!         ├── BytewiseMove → bulk fill / overlap-safe copy (u8, char)
//!         ├── PerSlot      → clone into each slot, drop guard for unwind
//!         └── underlay-core (classification: Construct trait + strategy tags)
//! ```
//!
//! Dispatch is resolved entirely at compile time: the element's
//! [`Construct::Strategy`] tag picks the [`FillStrategy`] impl during
//! monomorphisation. There is no runtime branch and no dynamic check; both
//! paths of a given operation are observably equivalent, so branch
//! selection is purely a performance decision.
//!
//! # Safety model
//!
//! The [`raw`] module works on raw pointers over caller-owned storage and
//! is `unsafe` end to end: this crate never allocates, never bounds-checks,
//! and requires every destination slot to be unconstructed. The [`slice`]
//! module wraps the same dispatchers in a safe API over
//! `&mut [MaybeUninit<T>]`.
//!
//! If a clone panics partway through a per-slot fill or copy, the elements
//! already constructed by that call are dropped in place before the panic
//! propagates — the destination range is left fully unconstructed again.
//!
//! # Example
//!
//! ```rust
//! use std::mem::MaybeUninit;
//!
//! let mut storage = [const { MaybeUninit::<String>::uninit() }; 3];
//! let filled = underlay::slice::fill(&mut storage, &String::from("ab"));
//! assert_eq!(filled, ["ab", "ab", "ab"]);
//! // Storage is stack-owned: drop the constructed elements before it goes away.
//! unsafe { std::ptr::drop_in_place(filled as *mut [String]) };
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod raw;
pub mod slice;
pub mod strategy;

pub use error::FillError;
pub use strategy::{FillStrategy, Fillable};
pub use underlay_core::{Bitwise, BytewiseMove, Construct, PerSlot, Tag};
