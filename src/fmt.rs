use core::fmt;

use crate::bitmask::Bitmask;
use crate::bits::Bits;
use crate::flags::Flags;

/// Writes the declared names covering `bits`, then any leftover bits as one
/// hex group. A flag is named only if all of its bits are set and it still
/// covers something not named yet.
fn write_names<F: Flags>(
    bits: F::Bits,
    f: &mut fmt::Formatter<'_>,
    separator: &str,
) -> fmt::Result {
    if bits.is_empty() {
        return f.write_str("0");
    }

    let mut remaining = bits;
    let mut first = true;
    for flag in F::FLAGS {
        let value = flag.value().raw_value();
        if value.is_empty() || !bits.contains(value) || !remaining.intersects(value) {
            continue;
        }
        if !first {
            f.write_str(separator)?;
        }
        first = false;
        f.write_str(flag.name())?;
        remaining &= !value;
    }

    if !remaining.is_empty() {
        if !first {
            f.write_str(separator)?;
        }
        write!(f, "{remaining:#x}")?;
    }
    Ok(())
}

/// `Small|Funky`, `Small|0x20` for undeclared bits, `0` when empty.
impl<F: Flags> fmt::Display for Bitmask<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_names::<F>(self.bits(), f, "|")
    }
}

impl<F: Flags> fmt::Debug for Bitmask<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitmask<{}>(", F::NAME)?;
        write_names::<F>(self.bits(), f, " | ")?;
        f.write_str(")")
    }
}

macro_rules! radix {
    ($($trait:ident),*) => {
        $(
            impl<F: Flags> fmt::$trait for Bitmask<F> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$trait::fmt(&self.bits(), f)
                }
            }
        )*
    };
}

radix!(LowerHex, UpperHex, Binary, Octal);
