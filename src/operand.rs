use crate::bitmask::Bitmask;
use crate::flags::{Flags, HasBits};

/// One argument of [`Bitmask::from_operands`]: a single flag or a whole mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand<F: Flags> {
    Flag(F),
    Mask(Bitmask<F>),
}

impl<F: Flags> HasBits for Operand<F> {
    type Bits = F::Bits;

    #[inline]
    fn raw_value(&self) -> F::Bits {
        match self {
            Self::Flag(flag) => flag.raw_value(),
            Self::Mask(mask) => mask.bits(),
        }
    }
}

impl<F: Flags> From<F> for Operand<F> {
    fn from(flag: F) -> Self {
        Self::Flag(flag)
    }
}

impl<F: Flags> From<Bitmask<F>> for Operand<F> {
    fn from(mask: Bitmask<F>) -> Self {
        Self::Mask(mask)
    }
}
