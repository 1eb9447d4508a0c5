use core::iter::FromIterator;
use core::mem;
use core::ops::{self, RangeBounds};

use alloc::vec::Vec;

use crate::util::{bounds_to_range, normalize};
use crate::{AsIndex, Error, Result};

mod iter;

pub use self::iter::{IntoIter, Iter};

/// A growable list whose integer indices wrap around its length.
///
/// Every index-based operation (`get`, `set`, `delete`, `pop_at`, `insert_at`) accepts any
/// integer and resolves it to `index mod len` with floored modulo, so `-1` is the last element and
/// `len` is the first one again. The modulus is always the length at the time of the call.
///
/// Range operations (`slice`, `set_slice`, `delete_slice`) do *not* wrap; they behave exactly like
/// the corresponding operations on a `Vec`.
///
/// An empty list has nothing to wrap around, so index-based operations on it report the same
/// errors a plain vector access would: [`Error::IndexOutOfRange`] or, for pops,
/// [`Error::EmptyContainer`].
///
/// ```rust
/// # use cyclic::WrapList;
/// let mut list = WrapList::from(vec![10, 20, 30]);
/// assert_eq!(list[5], 30);
/// assert_eq!(list[-4], 30);
/// list.set(7, 99).unwrap();
/// assert_eq!(list, [10, 99, 30]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WrapList<T>(Vec<T>);

impl<T> WrapList<T> {
    pub fn new() -> Self {
        WrapList(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        WrapList(Vec::with_capacity(capacity))
    }

    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Resolves `index` to the position it refers to in the current list.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if the list is empty, [`Error::InvalidIndexType`] if `index`
    /// has no integer representation.
    pub fn resolve<I: AsIndex>(&self, index: I) -> Result<usize> {
        let raw = index.as_index()?;
        if self.is_empty() {
            return Err(Error::IndexOutOfRange { index: raw, len: 0 });
        }
        Ok(self.position(raw))
    }

    /// Returns a reference to the element at the wrapped `index`.
    pub fn get<I: AsIndex>(&self, index: I) -> Result<&T> {
        let pos = self.resolve(index)?;
        Ok(&self.0[pos])
    }

    /// Returns a mutable reference to the element at the wrapped `index`.
    pub fn get_mut<I: AsIndex>(&mut self, index: I) -> Result<&mut T> {
        let pos = self.resolve(index)?;
        Ok(&mut self.0[pos])
    }

    /// Overwrites the element at the wrapped `index`.
    pub fn set<I: AsIndex>(&mut self, index: I, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Overwrites the element at the wrapped `index`, returning the previous one.
    pub fn replace<I: AsIndex>(&mut self, index: I, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Removes the element at the wrapped `index`.
    pub fn delete<I: AsIndex>(&mut self, index: I) -> Result<()> {
        let pos = self.resolve(index)?;
        self.0.remove(pos);
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Result<T> {
        self.0.pop().ok_or(Error::EmptyContainer)
    }

    /// Removes and returns the element at the wrapped `index`.
    ///
    /// ```rust
    /// # use cyclic::WrapList;
    /// let mut list = WrapList::from(vec![1, 2, 3]);
    /// assert_eq!(list.pop_at(3), Ok(1));
    /// assert_eq!(list, [2, 3]);
    /// ```
    pub fn pop_at<I: AsIndex>(&mut self, index: I) -> Result<T> {
        let raw = index.as_index()?;
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let pos = self.position(raw);
        Ok(self.0.remove(pos))
    }

    /// Inserts `value` before the element at the wrapped `index`.
    ///
    /// Inserting into an empty list always succeeds and simply appends, regardless of `index`.
    pub fn insert_at<I: AsIndex>(&mut self, index: I, value: T) -> Result<()> {
        let raw = index.as_index()?;
        if self.is_empty() {
            tracing::trace!(index = %raw, "insert into empty list, appending");
            self.0.push(value);
            return Ok(());
        }
        let pos = self.position(raw);
        self.0.insert(pos, value);
        Ok(())
    }

    /// Replaces the elements in `range` with `values`; the list may grow or shrink.
    pub fn set_slice<R, I>(&mut self, range: R, values: I) -> Result<()>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let range = bounds_to_range(range, self.len())?;
        self.0.splice(range, values);
        Ok(())
    }

    /// Removes the elements in `range`.
    pub fn delete_slice<R: RangeBounds<usize>>(&mut self, range: R) -> Result<()> {
        let range = bounds_to_range(range, self.len())?;
        self.0.drain(range);
        Ok(())
    }

    /// Rotates the list so that the element at the wrapped `mid` becomes the first one.
    ///
    /// Rotating an empty list does nothing.
    pub fn rotate<I: AsIndex>(&mut self, mid: I) -> Result<()> {
        let raw = mid.as_index()?;
        if !self.is_empty() {
            let pos = self.position(raw);
            self.0.rotate_left(pos);
        }
        Ok(())
    }

    fn position(&self, raw: i128) -> usize {
        let len = self.len();
        let pos = normalize(raw, len as i128) as usize;
        if pos as i128 != raw {
            tracing::trace!(index = %raw, position = pos, len, "wrapped list index");
        }
        pos
    }
}

impl<T: Clone> WrapList<T> {
    pub fn from_slice(values: &[T]) -> Self {
        WrapList(values.to_vec())
    }

    /// Copies the elements in `range` into a new list. The range bounds are not wrapped.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<WrapList<T>> {
        let range = bounds_to_range(range, self.len())?;
        Ok(WrapList::from_slice(&self.0[range]))
    }
}

impl<T, I: AsIndex> ops::Index<I> for WrapList<T> {
    type Output = T;

    fn index(&self, index: I) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, I: AsIndex> ops::IndexMut<I> for WrapList<T> {
    fn index_mut(&mut self, index: I) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for WrapList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        WrapList(Vec::from_iter(iter))
    }
}

impl<T> Extend<T> for WrapList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> From<Vec<T>> for WrapList<T> {
    fn from(values: Vec<T>) -> Self {
        WrapList(values)
    }
}

impl<T, const N: usize> From<[T; N]> for WrapList<T> {
    fn from(values: [T; N]) -> Self {
        WrapList(Vec::from(values))
    }
}

impl<T> From<WrapList<T>> for Vec<T> {
    fn from(list: WrapList<T>) -> Self {
        list.0
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for WrapList<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.0 == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for WrapList<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.0 == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for WrapList<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == other
    }
}
