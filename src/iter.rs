use core::iter::FusedIterator;
use core::slice;

use crate::bitmask::Bitmask;
use crate::bits::Bits;
use crate::flags::{Flag, Flags};

/// Declared flags contained in a [`Bitmask`], in declaration order.
///
/// Zero-valued flags are never yielded. A composite flag is yielded
/// alongside its parts when all of its bits are set.
pub struct Iter<F: Flags> {
    bits: F::Bits,
    flags: slice::Iter<'static, Flag<F>>,
}

impl<F: Flags> Iter<F> {
    pub(crate) fn new(bits: F::Bits) -> Self {
        Self {
            bits,
            flags: F::FLAGS.iter(),
        }
    }
}

impl<F: Flags> Iterator for Iter<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        let bits = self.bits;
        self.flags.by_ref().map(Flag::value).find(|flag| {
            let value = flag.raw_value();
            !value.is_empty() && bits.contains(value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.flags.size_hint().1)
    }
}

impl<F: Flags> FusedIterator for Iter<F> {}

impl<F: Flags> IntoIterator for Bitmask<F> {
    type Item = F;
    type IntoIter = Iter<F>;

    fn into_iter(self) -> Iter<F> {
        self.iter()
    }
}

impl<F: Flags> IntoIterator for &Bitmask<F> {
    type Item = F;
    type IntoIter = Iter<F>;

    fn into_iter(self) -> Iter<F> {
        self.iter()
    }
}
