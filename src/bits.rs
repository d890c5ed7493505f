use crate::uint::Uint;

/// Which end of the value a mask or extraction applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Msb,
    Lsb,
}

/// Returns a `T`-width mask with exactly `bits` set bits at the chosen end.
///
/// `bits == 0` yields zero and `bits == T::BITS` yields all-ones; the
/// full-width case is branched explicitly because a shift by the full
/// width would overflow.
pub fn mask<T: Uint>(bits: usize, side: Side) -> T {
    debug_assert!(bits <= T::BITS);
    if bits == 0 {
        return T::ZERO;
    }
    if bits == T::BITS {
        return T::MAX;
    }
    match side {
        Side::Msb => !(T::MAX >> bits),
        Side::Lsb => T::MAX >> (T::BITS - bits),
    }
}

/// Returns the `bits`-wide MSB or LSB slice of `value`: right-justified
/// for `Msb`, masked in place for `Lsb`.
pub fn extract<T: Uint>(value: T, bits: usize, side: Side) -> T {
    debug_assert!(bits <= T::BITS);
    if bits == 0 {
        return T::ZERO;
    }
    let masked = value & mask(bits, side);
    match side {
        Side::Msb => masked >> (T::BITS - bits),
        Side::Lsb => masked,
    }
}

/// Returns the inclusive bit range `[from, to]` of `value`, 0-indexed
/// from the LSB, right-justified. Contract: `from <= to < T::BITS`.
pub fn subsequence<T: Uint>(value: T, to: usize, from: usize) -> T {
    debug_assert!(from <= to && to < T::BITS);
    extract(value, to + 1, Side::Lsb) >> from
}
