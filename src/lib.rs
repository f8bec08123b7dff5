//! Sets of named bit-flags held in a single integer.
//!
//! Declare a flag enumeration with [`flag_enum!`], then build a [`Bitmask`]
//! from any mix of its flags and other masks. Masks support membership
//! tests and set algebra through named methods and the usual operators.
//!
//! ```
//! use bitmask::{bitmask, flag_enum};
//!
//! flag_enum! {
//!     pub enum Desc: u8 {
//!         Small = 1,
//!         Round = 1 << 1,
//!         Funky = 1 << 2,
//!         Large = 1 << 3,
//!     }
//! }
//!
//! let mut marble = bitmask![Desc::Small, Desc::Round, Desc::Funky];
//! assert_eq!(marble.bits(), 7);
//! assert!(marble.contains(Desc::Small));
//! assert!(!marble.contains(Desc::Large));
//! assert!(marble.contains(Desc::Small | Desc::Round));
//!
//! marble.discard(Desc::Round);
//! assert_eq!(marble.bits(), 5);
//! assert_eq!(marble.to_string(), "Small|Funky");
//! ```

mod bitmask;
mod bits;
mod error;
mod flags;
mod fmt;
mod iter;
mod operand;
mod ops;

pub use crate::bitmask::Bitmask;
pub use crate::bits::Bits;
pub use crate::error::{BitmaskError, Result};
pub use crate::flags::{Flag, Flags, HasBits};
pub use crate::iter::Iter;
pub use crate::operand::Operand;
