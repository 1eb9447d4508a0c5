use crate::{Error, Result};

/// Values that can be interpreted as an integer index.
///
/// This is what "integer-like" means throughout the crate: every primitive integer implements it,
/// and so does [`WrapInt`](crate::WrapInt), which lets a cyclic integer index a
/// [`WrapList`](crate::WrapList) directly.
pub trait AsIndex {
    /// Returns the index as an `i128`, or [`Error::InvalidIndexType`] if it has no such
    /// representation.
    fn as_index(&self) -> Result<i128>;
}

macro_rules! impl_as_index {
    ($($ty:ty)*) => {
        $(
            impl AsIndex for $ty {
                #[inline]
                fn as_index(&self) -> Result<i128> {
                    Ok(*self as i128)
                }
            }
        )*
    };
}
impl_as_index! { u8 u16 u32 u64 usize i8 i16 i32 i64 isize i128 }

impl AsIndex for u128 {
    #[inline]
    fn as_index(&self) -> Result<i128> {
        i128::try_from(*self).map_err(|_| Error::InvalidIndexType)
    }
}

impl<I: AsIndex + ?Sized> AsIndex for &I {
    #[inline]
    fn as_index(&self) -> Result<i128> {
        (**self).as_index()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(5u8.as_index(), Ok(5));
        assert_eq!((-3i64).as_index(), Ok(-3));
        assert_eq!(usize::MAX.as_index(), Ok(usize::MAX as i128));
        assert_eq!(i128::MIN.as_index(), Ok(i128::MIN));
        assert_eq!((&7u16).as_index(), Ok(7));
    }

    #[test]
    fn u128_beyond_i128() {
        assert_eq!((i128::MAX as u128).as_index(), Ok(i128::MAX));
        assert_eq!(u128::MAX.as_index(), Err(Error::InvalidIndexType));
    }
}
