use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::int::WrapInt;
use crate::{Error, Integer, Result};

/// The right-hand side of a checked [`WrapInt`] operation.
///
/// Only [`Operand::Int`] is a valid arithmetic operand. Adding two cyclic integers has no single
/// meaningful interval, so [`Operand::Wrap`] is rejected with [`Error::InvalidOperand`]; it is
/// still accepted by [`WrapInt::eq_operand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand<D: Integer> {
    Int(D),
    Wrap(WrapInt<D>),
}

impl<D: Integer> Operand<D> {
    fn delta(self) -> Result<i128> {
        match self {
            Operand::Int(value) => Ok(value.widen()),
            Operand::Wrap(_) => Err(Error::InvalidOperand),
        }
    }
}

impl<D: Integer> From<D> for Operand<D> {
    fn from(value: D) -> Self {
        Operand::Int(value)
    }
}

impl<D: Integer> From<WrapInt<D>> for Operand<D> {
    fn from(value: WrapInt<D>) -> Self {
        Operand::Wrap(value)
    }
}

impl<T: Integer> WrapInt<T> {
    /// Adds `rhs` in place, wrapping around the interval.
    ///
    /// Fails with [`Error::InvalidOperand`] when `rhs` is another `WrapInt`, leaving `self`
    /// untouched.
    pub fn try_add_assign<D: Integer>(&mut self, rhs: impl Into<Operand<D>>) -> Result<()> {
        let delta = rhs.into().delta()?;
        self.shift(delta);
        Ok(())
    }

    /// Subtracts `rhs` in place, wrapping around the interval.
    ///
    /// Fails with [`Error::InvalidOperand`] when `rhs` is another `WrapInt`, leaving `self`
    /// untouched.
    pub fn try_sub_assign<D: Integer>(&mut self, rhs: impl Into<Operand<D>>) -> Result<()> {
        let delta = rhs.into().delta()?;
        self.shift(-delta);
        Ok(())
    }

    /// Non-mutating form of [`WrapInt::try_add_assign`].
    pub fn try_add<D: Integer>(&self, rhs: impl Into<Operand<D>>) -> Result<Self> {
        let mut clone = *self;
        clone.try_add_assign(rhs)?;
        Ok(clone)
    }

    /// Non-mutating form of [`WrapInt::try_sub_assign`].
    pub fn try_sub<D: Integer>(&self, rhs: impl Into<Operand<D>>) -> Result<Self> {
        let mut clone = *self;
        clone.try_sub_assign(rhs)?;
        Ok(clone)
    }
}

impl<T: Integer, D: Integer> AddAssign<D> for WrapInt<T> {
    fn add_assign(&mut self, rhs: D) {
        self.shift(rhs.widen());
    }
}

impl<T: Integer, D: Integer> SubAssign<D> for WrapInt<T> {
    fn sub_assign(&mut self, rhs: D) {
        self.shift(-rhs.widen());
    }
}

impl<T: Integer, D: Integer> Add<D> for WrapInt<T> {
    type Output = WrapInt<T>;

    fn add(mut self, rhs: D) -> WrapInt<T> {
        self += rhs;
        self
    }
}

impl<T: Integer, D: Integer> Sub<D> for WrapInt<T> {
    type Output = WrapInt<T>;

    fn sub(mut self, rhs: D) -> WrapInt<T> {
        self -= rhs;
        self
    }
}

impl<T: Integer> Neg for WrapInt<T> {
    type Output = WrapInt<T>;

    /// The modular negation of the visible value: in `[0, 5)`, `-1` is `4`.
    fn neg(self) -> WrapInt<T> {
        WrapInt {
            value: self.interval.wrap(-self.index()),
            interval: self.interval,
        }
    }
}

macro_rules! impl_reflected {
    ($($ty:ty)*) => {
        $(
            impl<T: Integer> Add<WrapInt<T>> for $ty {
                type Output = WrapInt<T>;

                fn add(self, rhs: WrapInt<T>) -> WrapInt<T> {
                    rhs + self
                }
            }

            impl<T: Integer> Sub<WrapInt<T>> for $ty {
                type Output = WrapInt<T>;

                fn sub(self, rhs: WrapInt<T>) -> WrapInt<T> {
                    -(rhs - self)
                }
            }

            impl PartialEq<WrapInt<$ty>> for $ty {
                fn eq(&self, other: &WrapInt<$ty>) -> bool {
                    *self == other.get()
                }
            }

            impl PartialOrd<WrapInt<$ty>> for $ty {
                fn partial_cmp(&self, other: &WrapInt<$ty>) -> Option<core::cmp::Ordering> {
                    Some(self.cmp(&other.get()))
                }
            }

            impl From<WrapInt<$ty>> for $ty {
                fn from(value: WrapInt<$ty>) -> $ty {
                    value.get()
                }
            }
        )*
    };
}
impl_reflected! { u8 u16 u32 u64 usize i8 i16 i32 i64 isize }
