use core::fmt;
use core::ops::Range;

use crate::util::normalize;
use crate::{Error, Integer, Result};

/// A non-empty half-open interval `[left, right)`.
///
/// # Invariants
/// `left < right`, so [`Interval::span`] is always strictly positive.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T: Integer> {
    left: T,
    right: T,
}

impl<T: Integer> Interval<T> {
    /// Creates a new interval, failing with [`Error::InvalidInterval`] if `right <= left`.
    ///
    /// ```rust
    /// # use cyclic::{Error, Interval};
    /// assert_eq!(Interval::new(-1, 2).unwrap().span(), 3);
    /// assert_eq!(Interval::new(1, 1), Err(Error::InvalidInterval { left: 1, right: 1 }));
    /// ```
    pub fn new(left: T, right: T) -> Result<Self> {
        if right <= left {
            return Err(Error::InvalidInterval {
                left: left.widen(),
                right: right.widen(),
            });
        }
        Ok(Interval { left, right })
    }

    /// The inclusive lower bound.
    #[inline]
    pub fn left(&self) -> T {
        self.left
    }

    /// The exclusive upper bound.
    #[inline]
    pub fn right(&self) -> T {
        self.right
    }

    /// `right - left`, computed without overflow.
    #[inline]
    pub fn span(&self) -> i128 {
        self.right.widen() - self.left.widen()
    }

    /// The number of points in the interval.
    #[inline]
    pub fn len(&self) -> u128 {
        self.span().unsigned_abs()
    }

    pub fn contains(&self, value: T) -> bool {
        self.left <= value && value < self.right
    }

    /// Maps an arbitrary integer onto its unique representative inside the interval.
    ///
    /// ```rust
    /// # use cyclic::Interval;
    /// let iv = Interval::new(-1, 2).unwrap();
    /// assert_eq!(iv.wrap(2), -1);
    /// assert_eq!(iv.wrap(-2), 1);
    /// ```
    pub fn wrap(&self, value: i128) -> T {
        T::narrow(self.left.widen() + self.offset_of(value))
    }

    /// The position of `value` relative to `left`, in `0..span`.
    ///
    /// Both operands are reduced before subtracting so that no intermediate value can overflow.
    pub(crate) fn offset_of(&self, value: i128) -> i128 {
        let span = self.span();
        normalize(normalize(value, span) - normalize(self.left.widen(), span), span)
    }

    /// Iterates all points of the interval in increasing order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> {
        (self.left.widen()..self.right.widen()).map(T::narrow)
    }
}

impl<T: Integer> fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?})", self.left, self.right)
    }
}

impl<T: Integer> TryFrom<Range<T>> for Interval<T> {
    type Error = Error;

    fn try_from(range: Range<T>) -> Result<Self> {
        Interval::new(range.start, range.end)
    }
}

impl<T: Integer> From<Interval<T>> for Range<T> {
    fn from(interval: Interval<T>) -> Self {
        interval.left..interval.right
    }
}
