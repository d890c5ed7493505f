use std::collections::VecDeque;

use crate::bits::{mask, subsequence, Side};
use crate::error::BufferError;
use crate::uint::Uint;

/// Bit-granular read/write buffer over a deque of fixed-width chunks.
///
/// Fields are packed MSB-first: each field's most significant bit lands at
/// the lowest unused bit position of the current chunk, filling chunks from
/// their high-order end downward. Writing appends chunks at the tail as
/// needed; reading reclaims fully consumed chunks from the head.
#[derive(Debug, Clone)]
pub struct BitDeque<C: Uint = u8> {
    chunks: VecDeque<C>,
    read_cursor: usize,
    write_cursor: usize,
}

impl<C: Uint> BitDeque<C> {
    /// Creates an empty buffer: zero chunks, both cursors at 0.
    pub fn new() -> Self {
        BitDeque {
            chunks: VecDeque::new(),
            read_cursor: 0,
            write_cursor: 0,
        }
    }

    /// Number of unread bits currently buffered.
    pub fn size_in_bits(&self) -> usize {
        self.write_cursor - self.read_cursor
    }

    pub fn is_empty(&self) -> bool {
        self.size_in_bits() == 0
    }

    /// Writes the `n` least significant bits of `value`, growing storage as
    /// needed. Bits of `value` above `n` are masked off. `n == 0` is a no-op.
    pub fn put<T: Uint>(&mut self, value: T, n: usize) -> Result<(), BufferError> {
        if n > T::BITS {
            return Err(BufferError::FieldTooWide {
                requested: n,
                width: T::BITS,
            });
        }
        self.grow(n);
        self.put_unchecked(value.into_u64(), n);
        Ok(())
    }

    /// Reads the next `n` bits, right-justified into a `T`, then reclaims
    /// fully consumed leading chunks.
    pub fn get<T: Uint>(&mut self, n: usize) -> Result<T, BufferError> {
        if n > T::BITS {
            return Err(BufferError::FieldTooWide {
                requested: n,
                width: T::BITS,
            });
        }
        let available = self.size_in_bits();
        if n > available {
            return Err(BufferError::InsufficientData {
                requested: n,
                available,
            });
        }
        let value = self.get_unchecked(n);
        self.shrink();
        Ok(T::from_u64(value))
    }

    /// Writes a single bit.
    pub fn put_bit(&mut self, bit: bool) {
        self.grow(1);
        self.put_unchecked(u64::from(bit), 1);
    }

    /// Reads a single bit.
    pub fn get_bit(&mut self) -> Result<bool, BufferError> {
        Ok(self.get::<u8>(1)? != 0)
    }

    /// Read-only access to the i-th physically stored chunk.
    pub fn chunk_at(&self, index: usize) -> Option<C> {
        self.chunks.get(index).copied()
    }

    /// Number of physically stored chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Drops all storage and resets both cursors.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.read_cursor = 0;
        self.write_cursor = 0;
    }

    /// Writes the `n` low bits of `val` at the write cursor, chunk by chunk.
    /// Assumes capacity for `n` more bits already exists.
    fn put_unchecked(&mut self, val: u64, mut n: usize) {
        debug_assert!(n <= u64::BITS as usize);
        debug_assert!(self.write_cursor + n <= self.chunks.len() * C::BITS);
        let val = val & mask::<u64>(n, Side::Lsb);
        while n > 0 {
            let index = self.write_cursor / C::BITS;
            let offset = self.write_cursor % C::BITS;
            let room = C::BITS - offset;
            let take = room.min(n);
            // The `take` highest of the n still-unwritten bits of val.
            let slice = subsequence(val, n - 1, n - take);
            self.chunks[index] = self.chunks[index] | (C::from_u64(slice) << (room - take));
            self.write_cursor += take;
            n -= take;
        }
    }

    /// Reads `n` bits at the read cursor, chunk by chunk, accumulating them
    /// right-justified. Assumes `n` unread bits exist. Does not reclaim.
    fn get_unchecked(&mut self, mut n: usize) -> u64 {
        debug_assert!(n <= u64::BITS as usize);
        debug_assert!(n <= self.size_in_bits());
        let mut acc = 0u64;
        while n > 0 {
            let index = self.read_cursor / C::BITS;
            let offset = self.read_cursor % C::BITS;
            let room = C::BITS - offset;
            let take = room.min(n);
            let chunk = self.chunks[index];
            let slice = subsequence(chunk, C::BITS - 1 - offset, C::BITS - offset - take);
            if take < u64::BITS as usize {
                acc <<= take;
            }
            // take == 64 only happens on the first pass, where acc is 0.
            acc |= slice.into_u64();
            self.read_cursor += take;
            n -= take;
        }
        acc
    }

    /// Appends zeroed chunks until `extra_bits` more bits fit past the
    /// write cursor.
    fn grow(&mut self, extra_bits: usize) {
        let needed = self.write_cursor + extra_bits;
        let capacity = self.chunks.len() * C::BITS;
        if needed > capacity {
            let extra_chunks = (needed - capacity).div_ceil(C::BITS);
            self.chunks.resize(self.chunks.len() + extra_chunks, C::ZERO);
        }
    }

    /// Pops fully consumed leading chunks, rebasing both cursors, and drops
    /// all storage once the buffer is drained so a drained buffer is
    /// indistinguishable from a fresh one.
    fn shrink(&mut self) {
        while self.read_cursor >= C::BITS {
            self.chunks.pop_front();
            self.read_cursor -= C::BITS;
            self.write_cursor -= C::BITS;
        }
        if self.read_cursor == self.write_cursor {
            self.clear();
        }
    }
}

impl<C: Uint> Default for BitDeque<C> {
    fn default() -> Self {
        Self::new()
    }
}
