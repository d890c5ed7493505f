use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width unsigned integer usable both as a storage chunk and as a
/// field value. Sealed: only u8, u16, u32 and u64 implement it.
pub trait Uint:
    Sized
    + Copy
    + Eq
    + Debug
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + sealed::Sealed
{
    const BITS: usize;
    const ZERO: Self;
    const MAX: Self;

    /// Truncates to `Self`'s width.
    fn from_u64(value: u64) -> Self;

    fn into_u64(self) -> u64;
}

macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Uint for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $ty
                }

                #[inline]
                fn into_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_uint!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_constants() {
        assert_eq!(<u8 as Uint>::BITS, 8);
        assert_eq!(<u16 as Uint>::BITS, 16);
        assert_eq!(<u32 as Uint>::BITS, 32);
        assert_eq!(<u64 as Uint>::BITS, 64);
    }

    #[test]
    fn test_from_u64_truncates() {
        assert_eq!(u8::from_u64(0x1FF), 0xFF);
        assert_eq!(u16::from_u64(0x12345), 0x2345);
        assert_eq!(u32::from_u64(u64::MAX), u32::MAX);
        assert_eq!(u64::from_u64(u64::MAX), u64::MAX);
    }
}
