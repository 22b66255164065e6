//! Error types for the safe slice layer.
//!
//! The raw dispatchers have no runtime errors by contract (every failure
//! mode there is a compile-time trait-resolution failure or caller UB).
//! The slice layer checks the one thing it can: that the shapes of the
//! slices it was handed agree.

use std::error::Error;
use std::fmt;

/// A shape mismatch reported by the [`slice`](crate::slice) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillError {
    /// `fill_n` was asked for more elements than the destination holds.
    OutOfRoom {
        /// Number of elements requested.
        requested: usize,
        /// Number of slots the destination actually has.
        capacity: usize,
    },
    /// `copy_from` was handed source and destination of different lengths.
    LengthMismatch {
        /// Source length.
        src: usize,
        /// Destination length.
        dst: usize,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRoom {
                requested,
                capacity,
            } => {
                write!(f, "requested {requested} elements but destination holds {capacity}")
            }
            Self::LengthMismatch { src, dst } => {
                write!(f, "source length {src} does not match destination length {dst}")
            }
        }
    }
}

impl Error for FillError {}
