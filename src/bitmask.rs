use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::bits::Bits;
use crate::error::{BitmaskError, Result};
use crate::flags::{Flags, HasBits};
use crate::iter::Iter;
use crate::operand::Operand;

/// A set of flags from `F`, stored as one unsigned integer.
///
/// Bits that `F` does not declare are kept as they are and take part in
/// every operation like any other member. Masks over different
/// enumerations compare by raw value; they combine only when they share
/// a backing integer.
///
/// The named methods are the reference semantics; the operators in
/// `core::ops` forward to them:
///
/// | method                  | operator | in place                 |
/// |-------------------------|----------|--------------------------|
/// | `union_with`            | `\|` `+` | `add`, `\|=`, `+=`       |
/// | `intersect_with`        | `&`      | `retain`, `&=`           |
/// | `symmetric_difference`  | `^`      | `toggle`, `^=`           |
/// | `difference`            | `-`      | `discard`, `-=`          |
/// | `complement`            | `!`      |                          |
pub struct Bitmask<F: Flags> {
    bits: F::Bits,
    flags: PhantomData<F>,
}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<F: Flags> Clone for Bitmask<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Flags> Copy for Bitmask<F> {}

impl<F: Flags> Default for Bitmask<F> {
    fn default() -> Self {
        Self::empty()
    }
}

#[allow(clippy::needless_pass_by_value)]
impl<F: Flags> Bitmask<F> {
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_bits_retain(<F::Bits as Bits>::EMPTY)
    }

    /// Every flag `F` declares.
    #[must_use]
    pub fn all() -> Self {
        Self::from_bits_retain(F::all_bits())
    }

    /// Wraps `bits` as-is, undeclared bits included.
    #[must_use]
    pub const fn from_bits_retain(bits: F::Bits) -> Self {
        Self {
            bits,
            flags: PhantomData,
        }
    }

    /// # Errors
    ///
    /// [`BitmaskError::UnknownBits`] if `bits` has bits outside every
    /// declared flag.
    pub fn from_bits(bits: F::Bits) -> Result<Self> {
        let unknown = bits & !F::all_bits();
        if unknown.is_empty() {
            return Ok(Self::from_bits_retain(bits));
        }
        log::debug!(
            "rejecting {bits:#x} for {}: bits {unknown:#x} are undeclared",
            F::NAME
        );
        Err(BitmaskError::UnknownBits {
            flags: F::NAME,
            value: bits.into(),
            unknown: unknown.into(),
        })
    }

    #[must_use]
    pub fn from_bits_truncate(bits: F::Bits) -> Self {
        Self::from_bits_retain(bits & F::all_bits())
    }

    #[must_use]
    pub fn from_flag(flag: F) -> Self {
        Self::from_bits_retain(flag.raw_value())
    }

    /// Union of every operand, in order. An empty sequence gives the empty
    /// mask.
    #[must_use]
    pub fn from_operands<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand<F>>,
    {
        operands.into_iter().fold(Self::empty(), |mut mask, operand| {
            let operand: Operand<F> = operand.into();
            mask.add(operand);
            mask
        })
    }

    /// Union of raw flag values, each of which must be a declared flag.
    ///
    /// # Errors
    ///
    /// [`BitmaskError::InvalidOperand`] for the first value that names no
    /// flag of `F`.
    pub fn try_from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = F::Bits>,
    {
        values
            .into_iter()
            .try_fold(Self::empty(), |mask, value| -> Result<Self> {
                Ok(mask.union_with(F::try_from_bits(value)?))
            })
    }

    /// The raw value.
    #[must_use]
    pub const fn bits(&self) -> F::Bits {
        self.bits
    }

    pub fn set_bits(&mut self, bits: F::Bits) {
        self.bits = bits;
    }

    /// Bits set in this mask that `F` does not declare.
    #[must_use]
    pub fn unknown_bits(&self) -> F::Bits {
        self.bits & !F::all_bits()
    }

    #[must_use]
    pub fn bit_count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Every declared flag is set.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.bits.contains(F::all_bits())
    }

    /// Every bit of `other` is set here. A multi-bit operand is tested as a
    /// unit, and the empty operand is always contained.
    #[must_use]
    pub fn contains(&self, other: impl HasBits<Bits = F::Bits>) -> bool {
        self.bits.contains(other.raw_value())
    }

    /// At least one bit of `other` is set here.
    #[must_use]
    pub fn intersects(&self, other: impl HasBits<Bits = F::Bits>) -> bool {
        self.bits.intersects(other.raw_value())
    }

    #[must_use]
    pub fn union_with(&self, other: impl HasBits<Bits = F::Bits>) -> Self {
        Self::from_bits_retain(self.bits | other.raw_value())
    }

    #[must_use]
    pub fn intersect_with(&self, other: impl HasBits<Bits = F::Bits>) -> Self {
        Self::from_bits_retain(self.bits & other.raw_value())
    }

    #[must_use]
    pub fn symmetric_difference(&self, other: impl HasBits<Bits = F::Bits>) -> Self {
        Self::from_bits_retain(self.bits ^ other.raw_value())
    }

    #[must_use]
    pub fn difference(&self, other: impl HasBits<Bits = F::Bits>) -> Self {
        Self::from_bits_retain(self.bits & !other.raw_value())
    }

    /// Flips every bit of `F::Bits`, undeclared ones included. Use
    /// [`Bitmask::complement_within`] to stay inside a known set of flags.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self::from_bits_retain(!self.bits)
    }

    /// Bits of `universe` that are not set here.
    #[must_use]
    pub fn complement_within(&self, universe: impl HasBits<Bits = F::Bits>) -> Self {
        Self::from_bits_retain(!self.bits & universe.raw_value())
    }

    pub fn add(&mut self, other: impl HasBits<Bits = F::Bits>) {
        self.bits |= other.raw_value();
    }

    /// Clears the bits of `other`. Bits that are not set are ignored.
    pub fn discard(&mut self, other: impl HasBits<Bits = F::Bits>) {
        self.bits &= !other.raw_value();
    }

    /// Clears the bits of `other`, which must all be set.
    ///
    /// # Errors
    ///
    /// [`BitmaskError::NotPresent`] if any bit of `other` is not set; the
    /// mask is left unchanged.
    pub fn remove(&mut self, other: impl HasBits<Bits = F::Bits>) -> Result<()> {
        let bits = other.raw_value();
        if !self.bits.contains(bits) {
            log::debug!("{bits:#x} is not in {} bitmask {:#x}", F::NAME, self.bits);
            return Err(BitmaskError::NotPresent {
                flags: F::NAME,
                value: bits.into(),
            });
        }
        self.bits &= !bits;
        Ok(())
    }

    /// Keeps only the bits also set in `other`.
    pub fn retain(&mut self, other: impl HasBits<Bits = F::Bits>) {
        self.bits &= other.raw_value();
    }

    pub fn toggle(&mut self, other: impl HasBits<Bits = F::Bits>) {
        self.bits ^= other.raw_value();
    }

    pub fn set(&mut self, other: impl HasBits<Bits = F::Bits>, enabled: bool) {
        if enabled {
            self.add(other);
        } else {
            self.discard(other);
        }
    }

    /// The same raw value, read as flags of `G`.
    #[must_use]
    pub fn cast<G: Flags<Bits = F::Bits>>(&self) -> Bitmask<G> {
        Bitmask::from_bits_retain(self.bits)
    }

    /// Declared flags that are fully contained, in declaration order.
    #[must_use]
    pub fn iter(&self) -> Iter<F> {
        Iter::new(self.bits)
    }
}

impl<F: Flags> HasBits for Bitmask<F> {
    type Bits = F::Bits;

    #[inline]
    fn raw_value(&self) -> F::Bits {
        self.bits
    }
}

impl<F: Flags> From<F> for Bitmask<F> {
    fn from(flag: F) -> Self {
        Self::from_flag(flag)
    }
}

impl<F: Flags> From<Operand<F>> for Bitmask<F> {
    fn from(operand: Operand<F>) -> Self {
        Self::from_bits_retain(operand.raw_value())
    }
}

/// Masks compare by raw value, whatever their enumeration or width.
impl<F: Flags, G: Flags> PartialEq<Bitmask<G>> for Bitmask<F> {
    fn eq(&self, other: &Bitmask<G>) -> bool {
        Into::<u128>::into(self.bits) == Into::<u128>::into(other.bits)
    }
}

impl<F: Flags> Eq for Bitmask<F> {}

// Widened so equal masks of different widths hash alike.
impl<F: Flags> Hash for Bitmask<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Into::<u128>::into(self.bits).hash(state);
    }
}

/// Builds a [`Bitmask`] from any mix of flags and bitmasks.
///
/// ```
/// use bitmask::{Bitmask, bitmask, flag_enum};
///
/// flag_enum! {
///     enum Desc: u8 {
///         Small = 1,
///         Round = 1 << 1,
///         Funky = 1 << 2,
///     }
/// }
///
/// let round = bitmask![Desc::Round];
/// assert_eq!(bitmask![Desc::Small, round, Desc::Funky].bits(), 7);
///
/// let empty: Bitmask<Desc> = bitmask![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! bitmask {
    () => {
        $crate::Bitmask::empty()
    };
    ($($operand:expr),+ $(,)?) => {
        $crate::Bitmask::from_operands([$($crate::Operand::from($operand)),+])
    };
}
