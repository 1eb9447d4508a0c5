use core::ops::{Bound, Range, RangeBounds};

use crate::{Error, Result};

/// Maps `value` onto its representative in `0..span` using floored modulo.
///
/// Unlike `%`, the result takes the sign of `span`, so `normalize(-1, 5) == 4`.
///
/// `span` must be positive; callers establish that before getting here.
#[inline]
pub fn normalize(value: i128, span: i128) -> i128 {
    debug_assert!(span > 0, "normalize called with non-positive span {span}");
    value.rem_euclid(span)
}

/// Turn a RangeBounds into a Range over a sequence of length `len`, unless it does not fit.
pub(crate) fn bounds_to_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&n) => Some(n),
        Bound::Excluded(&n) => n.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&n) => n.checked_add(1),
        Bound::Excluded(&n) => Some(n),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
        (start, end) => Err(Error::SliceOutOfRange {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_is_floored() {
        assert_eq!(normalize(7, 5), 2);
        assert_eq!(normalize(-1, 5), 4);
        assert_eq!(normalize(-5, 5), 0);
        assert_eq!(normalize(-6, 5), 4);
        assert_eq!(normalize(0, 1), 0);
        assert_eq!(normalize(i128::MIN, 3), i128::MIN.rem_euclid(3));
    }

    #[test]
    fn bounds_within_len() {
        assert_eq!(bounds_to_range(.., 5), Ok(0..5));
        assert_eq!(bounds_to_range(1..4, 5), Ok(1..4));
        assert_eq!(bounds_to_range(1..=4, 5), Ok(1..5));
        assert_eq!(bounds_to_range(5.., 5), Ok(5..5));
        assert_eq!(bounds_to_range(..0, 0), Ok(0..0));
    }

    #[test]
    fn bounds_out_of_len() {
        assert_eq!(
            bounds_to_range(2..6, 5),
            Err(Error::SliceOutOfRange { start: 2, end: 6, len: 5 })
        );
        assert_eq!(
            bounds_to_range(3..2, 5),
            Err(Error::SliceOutOfRange { start: 3, end: 2, len: 5 })
        );
        assert_eq!(
            bounds_to_range(0..=usize::MAX, 5),
            Err(Error::SliceOutOfRange { start: 0, end: usize::MAX, len: 5 })
        );
    }
}
