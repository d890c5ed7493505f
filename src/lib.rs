//! Bit-granular read/write buffer backed by a deque of fixed-width chunks.
//!
//! [`BitDeque`] lets a caller push and pop integer fields with an arbitrary
//! bit width, packed MSB-first into chunks of a caller-chosen unsigned
//! integer type. Storage grows at the tail as fields are written and is
//! reclaimed from the head as they are read.

mod bits;
mod buffer;
mod error;
mod uint;

pub use bits::{extract, mask, subsequence, Side};
pub use buffer::BitDeque;
pub use error::BufferError;
pub use uint::Uint;
