use thiserror::Error;

pub type Result<T, E = BitmaskError> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmaskError {
    /// A raw value was used as a flag but names none of the declared flags.
    #[error("{value:#x} is not a {flags} flag")]
    InvalidOperand { flags: &'static str, value: u128 },

    #[error("bits {unknown:#x} of {value:#x} are not declared by {flags}")]
    UnknownBits {
        flags: &'static str,
        value: u128,
        unknown: u128,
    },

    /// `remove` was asked for bits that are not all set.
    #[error("{value:#x} is not in the {flags} bitmask")]
    NotPresent { flags: &'static str, value: u128 },
}
