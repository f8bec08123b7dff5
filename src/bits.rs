use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Unsigned integer backing a [`Bitmask`](crate::Bitmask).
///
/// Only fixed-width types implement this, so "every bit" means the same
/// thing on every target.
pub trait Bits:
    Copy
    + Eq
    + Hash
    + Default
    + fmt::Debug
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Binary
    + fmt::Octal
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Into<u128>
    + Send
    + Sync
    + 'static
{
    const EMPTY: Self;
    const ALL: Self;
    const WIDTH: u32;

    fn count_ones(self) -> u32;

    #[inline]
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Every bit of `other` is also set in `self`.
    #[inline]
    fn contains(self, other: Self) -> bool {
        (self & other) == other
    }

    #[inline]
    fn intersects(self, other: Self) -> bool {
        !(self & other).is_empty()
    }
}

macro_rules! bits {
    ($($ty:ident),*) => {
        $(
            impl Bits for $ty {
                const EMPTY: Self = 0;
                const ALL: Self = $ty::MAX;
                const WIDTH: u32 = $ty::BITS;

                #[inline]
                fn count_ones(self) -> u32 {
                    $ty::count_ones(self)
                }
            }
        )*
    };
}

bits!(u8, u16, u32, u64, u128);
