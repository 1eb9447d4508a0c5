#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod alias;
pub mod int;
pub mod interval;
pub mod list;
pub mod weighted;

mod error;
mod index;
#[cfg(feature = "serde")]
mod serde_impls;
mod util;

pub use self::alias::{AliasEnum, Variant, VariantDef};
pub use self::error::{Error, Result};
pub use self::index::AsIndex;
pub use self::int::{Operand, WrapInt};
pub use self::interval::Interval;
pub use self::list::WrapList;
pub use self::util::normalize;
pub use self::weighted::Weighted;

use core::fmt;
use core::hash::Hash;

use num_traits::PrimInt;

/// Primitive integers usable as the value type of a [`WrapInt`].
///
/// All interval arithmetic happens in `i128`, which holds every implementor as well as the sum or
/// difference of any two of them.
pub trait Integer:
    PrimInt
    + AsIndex
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Octal
    + fmt::Binary
    + fmt::LowerExp
    + fmt::UpperExp
{
    fn widen(self) -> i128;
    /// Narrows a value that is known to lie within `Self::MIN..=Self::MAX`.
    fn narrow(wide: i128) -> Self;
}

macro_rules! impl_prim {
    ($($ty:ty)*) => {
        $(
            impl Integer for $ty {
                #[inline]
                fn widen(self) -> i128 { self as i128 }
                #[inline]
                fn narrow(wide: i128) -> Self {
                    debug_assert!(
                        (<$ty>::MIN as i128..=<$ty>::MAX as i128).contains(&wide),
                        "{} does not fit into {}", wide, stringify!($ty),
                    );
                    wide as $ty
                }
            }
        )*
    };
}
impl_prim! { u8 u16 u32 u64 usize i8 i16 i32 i64 isize }
