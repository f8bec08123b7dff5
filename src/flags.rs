use crate::bits::Bits;
use crate::error::{BitmaskError, Result};

/// Anything that reduces to a raw bit pattern.
///
/// Implemented by single flags, [`Bitmask`](crate::Bitmask),
/// [`Operand`](crate::Operand), and references to any of them. Every
/// operation on a bitmask takes its argument through this trait.
pub trait HasBits {
    type Bits: Bits;

    fn raw_value(&self) -> Self::Bits;
}

impl<T: HasBits + ?Sized> HasBits for &T {
    type Bits = T::Bits;

    #[inline]
    fn raw_value(&self) -> Self::Bits {
        (**self).raw_value()
    }
}

/// One named entry of a [`Flags`] enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag<F> {
    name: &'static str,
    value: F,
}

impl<F> Flag<F> {
    pub const fn new(name: &'static str, value: F) -> Self {
        Self { name, value }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> F
    where
        F: Copy,
    {
        self.value
    }
}

/// A closed enumeration of named flags, usually declared with
/// [`flag_enum!`](crate::flag_enum).
pub trait Flags: HasBits + Copy + 'static {
    /// Type name used when rendering masks and in errors.
    const NAME: &'static str;

    /// Every declared flag, in declaration order.
    const FLAGS: &'static [Flag<Self>];

    fn from_bits(bits: Self::Bits) -> Option<Self> {
        Self::FLAGS
            .iter()
            .map(Flag::value)
            .find(|flag| flag.raw_value() == bits)
    }

    /// Like [`Flags::from_bits`], for raw values coming from outside the
    /// type system.
    ///
    /// # Errors
    ///
    /// [`BitmaskError::InvalidOperand`] when `bits` is not the value of a
    /// declared flag.
    fn try_from_bits(bits: Self::Bits) -> Result<Self> {
        Self::from_bits(bits).ok_or_else(|| {
            log::debug!("{bits:#x} is not a {} flag", Self::NAME);
            BitmaskError::InvalidOperand {
                flags: Self::NAME,
                value: bits.into(),
            }
        })
    }

    /// Union of every declared flag.
    fn all_bits() -> Self::Bits {
        Self::FLAGS
            .iter()
            .fold(<Self::Bits as Bits>::EMPTY, |acc, flag| {
                acc | flag.value().raw_value()
            })
    }
}

/// Declares a flag enumeration backed by a fixed-width unsigned integer.
///
/// The generated enum derives `Debug, Clone, Copy, PartialEq, Eq, Hash`
/// and implements [`Flags`], `TryFrom` of and `From` into its integer, and
/// `|`, `&`, `^`, `!` producing a [`Bitmask`](crate::Bitmask).
///
/// ```
/// bitmask::flag_enum! {
///     pub enum Colors: u16 {
///         Teal = 1,
///         Pink = 1 << 1,
///         Blue = 1 << 2,
///     }
/// }
///
/// let mask = Colors::Teal | Colors::Blue;
/// assert_eq!(mask.bits(), 5);
/// assert_eq!(Colors::try_from(2u16), Ok(Colors::Pink));
/// assert!(Colors::try_from(3u16).is_err());
/// ```
#[macro_export]
macro_rules! flag_enum {
    (
        $(#[$outer:meta])*
        $vis:vis enum $Name:ident: $T:ident {
            $(
                $(#[$inner:meta])*
                $Variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($T)]
        $vis enum $Name {
            $(
                $(#[$inner])*
                $Variant = $value,
            )+
        }

        impl $crate::HasBits for $Name {
            type Bits = $T;

            #[inline]
            fn raw_value(&self) -> $T {
                *self as $T
            }
        }

        impl $crate::Flags for $Name {
            const NAME: &'static str = stringify!($Name);
            const FLAGS: &'static [$crate::Flag<Self>] = &[
                $($crate::Flag::new(stringify!($Variant), $Name::$Variant),)+
            ];
        }

        impl ::core::convert::TryFrom<$T> for $Name {
            type Error = $crate::BitmaskError;

            fn try_from(bits: $T) -> ::core::result::Result<Self, Self::Error> {
                <$Name as $crate::Flags>::try_from_bits(bits)
            }
        }

        impl ::core::convert::From<$Name> for $T {
            #[inline]
            fn from(flag: $Name) -> $T {
                flag as $T
            }
        }

        impl<R: $crate::HasBits<Bits = $T>> ::core::ops::BitOr<R> for $Name {
            type Output = $crate::Bitmask<$Name>;

            #[inline]
            fn bitor(self, rhs: R) -> Self::Output {
                $crate::Bitmask::from_flag(self).union_with(rhs)
            }
        }

        impl<R: $crate::HasBits<Bits = $T>> ::core::ops::BitAnd<R> for $Name {
            type Output = $crate::Bitmask<$Name>;

            #[inline]
            fn bitand(self, rhs: R) -> Self::Output {
                $crate::Bitmask::from_flag(self).intersect_with(rhs)
            }
        }

        impl<R: $crate::HasBits<Bits = $T>> ::core::ops::BitXor<R> for $Name {
            type Output = $crate::Bitmask<$Name>;

            #[inline]
            fn bitxor(self, rhs: R) -> Self::Output {
                $crate::Bitmask::from_flag(self).symmetric_difference(rhs)
            }
        }

        impl ::core::ops::Not for $Name {
            type Output = $crate::Bitmask<$Name>;

            #[inline]
            fn not(self) -> Self::Output {
                $crate::Bitmask::from_flag(self).complement()
            }
        }
    };
}
