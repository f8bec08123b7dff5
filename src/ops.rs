use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

use crate::bitmask::Bitmask;
use crate::flags::{Flags, HasBits};
use crate::operand::Operand;

impl<F: Flags, R: HasBits<Bits = F::Bits>> BitOr<R> for Bitmask<F> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: R) -> Self {
        self.union_with(rhs)
    }
}

/// Same as `|`.
impl<F: Flags, R: HasBits<Bits = F::Bits>> core::ops::Add<R> for Bitmask<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: R) -> Self {
        self.union_with(rhs)
    }
}

impl<F: Flags, R: HasBits<Bits = F::Bits>> BitAnd<R> for Bitmask<F> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: R) -> Self {
        self.intersect_with(rhs)
    }
}

impl<F: Flags, R: HasBits<Bits = F::Bits>> BitXor<R> for Bitmask<F> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: R) -> Self {
        self.symmetric_difference(rhs)
    }
}

impl<F: Flags, R: HasBits<Bits = F::Bits>> Sub<R> for Bitmask<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: R) -> Self {
        self.difference(rhs)
    }
}

impl<F: Flags> Not for Bitmask<F> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl<F: Flags, R: HasBits<Bits = F::Bits>> BitOrAssign<R> for Bitmask<F> {
    #[inline]
    fn bitor_assign(&mut self, rhs: R) {
        Bitmask::add(self, rhs);
    }
}

impl<F: Flags, R: HasBits<Bits = F::Bits>> core::ops::AddAssign<R> for Bitmask<F> {
    #[inline]
    fn add_assign(&mut self, rhs: R) {
        Bitmask::add(self, rhs);
    }
}

impl<F: Flags, R: HasBits<Bits = F::Bits>> BitAndAssign<R> for Bitmask<F> {
    #[inline]
    fn bitand_assign(&mut self, rhs: R) {
        self.retain(rhs);
    }
}

impl<F: Flags, R: HasBits<Bits = F::Bits>> BitXorAssign<R> for Bitmask<F> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: R) {
        self.toggle(rhs);
    }
}

impl<F: Flags, R: HasBits<Bits = F::Bits>> SubAssign<R> for Bitmask<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: R) {
        self.discard(rhs);
    }
}

impl<F: Flags> FromIterator<F> for Bitmask<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::from_operands(iter)
    }
}

impl<F: Flags> FromIterator<Operand<F>> for Bitmask<F> {
    fn from_iter<I: IntoIterator<Item = Operand<F>>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |mask, operand| mask.union_with(operand))
    }
}

impl<F: Flags> Extend<F> for Bitmask<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for flag in iter {
            Bitmask::add(self, flag);
        }
    }
}
