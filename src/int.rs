use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::util::normalize;
use crate::{AsIndex, Integer, Interval, Result};

mod ops;
#[cfg(test)]
mod test;

pub use self::ops::Operand;

/// A cyclic integer constrained to the half-open interval `[left, right)`.
///
/// Arithmetic (`+`, `-`, `+=`, `-=`, unary `-`) wraps modulo the interval span. Comparison,
/// hashing, formatting and indexing all act on the *visible* value, so a `WrapInt<T>` behaves like
/// a plain `T` everywhere except arithmetic.
///
/// Equality ignores the interval: two `WrapInt`s with different bounds but the same visible value
/// are equal, and both are equal to that plain integer.
///
/// ```rust
/// # use cyclic::WrapInt;
/// let mut x = WrapInt::up_to(0, 5i64).unwrap();
/// x += 7i64;
/// assert_eq!(x.get(), 2);
/// assert_eq!(format!("{x:03}"), "002");
/// ```
#[derive(Clone, Copy)]
pub struct WrapInt<T: Integer = i64> {
    // always inside `interval`
    value: T,
    interval: Interval<T>,
}

impl<T: Integer> WrapInt<T> {
    /// Creates a cyclic integer in `[left, right)` starting at `initial` wrapped into range.
    ///
    /// Out-of-range and negative starting values are the normal case and are wrapped with floored
    /// modulo. Only an empty interval is rejected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInterval`](crate::Error::InvalidInterval) if `right <= left`,
    /// [`Error::InvalidIndexType`](crate::Error::InvalidIndexType) if `initial` is not
    /// representable as an integer.
    pub fn new<D: AsIndex>(initial: D, left: T, right: T) -> Result<Self> {
        Self::in_interval(initial, Interval::new(left, right)?)
    }

    /// Shorthand for [`WrapInt::new`] with `left` set to zero.
    pub fn up_to<D: AsIndex>(initial: D, right: T) -> Result<Self> {
        Self::new(initial, T::zero(), right)
    }

    pub fn in_interval<D: AsIndex>(initial: D, interval: Interval<T>) -> Result<Self> {
        let value = interval.wrap(initial.as_index()?);
        Ok(WrapInt { value, interval })
    }

    /// The visible value, always within `left..right`.
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// The visible value widened for use as a sequence index.
    #[inline]
    pub fn index(&self) -> i128 {
        self.value.widen()
    }

    #[inline]
    pub fn left(&self) -> T {
        self.interval.left()
    }

    #[inline]
    pub fn right(&self) -> T {
        self.interval.right()
    }

    #[inline]
    pub fn span(&self) -> i128 {
        self.interval.span()
    }

    #[inline]
    pub fn interval(&self) -> Interval<T> {
        self.interval
    }

    /// The distance from `left` to the visible value, in `0..span`.
    #[inline]
    pub fn offset(&self) -> i128 {
        self.value.widen() - self.interval.left().widen()
    }

    /// How many steps forward it takes to get from `self` to `target` inside `self`'s interval.
    ///
    /// ```rust
    /// # use cyclic::WrapInt;
    /// let a = WrapInt::up_to(4, 5u8).unwrap();
    /// assert_eq!(a.distance_to(1), Ok(2));
    /// assert_eq!(a.distance_to(4), Ok(0));
    /// ```
    pub fn distance_to<D: AsIndex>(&self, target: D) -> Result<i128> {
        let diff = self.interval.offset_of(target.as_index()?) - self.offset();
        Ok(normalize(diff, self.span()))
    }

    /// The value one step forward, wrapping from `right - 1` back to `left`.
    pub fn succ(self) -> Self {
        self.shifted(1)
    }

    /// The value one step back, wrapping from `left` to `right - 1`.
    pub fn pred(self) -> Self {
        self.shifted(-1)
    }

    /// Compares visible values, accepting either a plain integer or another `WrapInt`.
    pub fn eq_operand<D: Integer>(&self, other: &Operand<D>) -> bool {
        let other = match other {
            Operand::Int(value) => value.widen(),
            Operand::Wrap(wrap) => wrap.index(),
        };
        self.index() == other
    }

    fn shifted(mut self, delta: i128) -> Self {
        self.shift(delta);
        self
    }

    fn shift(&mut self, delta: i128) {
        self.value = self.interval.wrap(self.value.widen() + delta);
    }
}

impl<T: Integer> AsIndex for WrapInt<T> {
    #[inline]
    fn as_index(&self) -> Result<i128> {
        Ok(self.index())
    }
}

impl<T: Integer> Borrow<T> for WrapInt<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: Integer> Hash for WrapInt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Integer, U: Integer> PartialEq<WrapInt<U>> for WrapInt<T> {
    fn eq(&self, other: &WrapInt<U>) -> bool {
        self.index() == other.index()
    }
}

impl<T: Integer> Eq for WrapInt<T> {}

impl<T: Integer> PartialEq<T> for WrapInt<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: Integer, U: Integer> PartialOrd<WrapInt<U>> for WrapInt<T> {
    fn partial_cmp(&self, other: &WrapInt<U>) -> Option<Ordering> {
        Some(self.index().cmp(&other.index()))
    }
}

impl<T: Integer> Ord for WrapInt<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Integer> PartialOrd<T> for WrapInt<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

impl<T: Integer> fmt::Debug for WrapInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapInt")
            .field("value", &self.value)
            .field("left", &self.interval.left())
            .field("right", &self.interval.right())
            .finish()
    }
}

macro_rules! impl_fmt {
    ($($trait:ident)*) => {
        $(
            impl<T: Integer> fmt::$trait for WrapInt<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$trait::fmt(&self.value, f)
                }
            }
        )*
    };
}
impl_fmt! { Display LowerHex UpperHex Octal Binary LowerExp UpperExp }
