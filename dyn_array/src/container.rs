use core::cmp::Ordering;

use crate::{ArrayList, ListError};

/// An ordered sequence of elements that can be searched, edited and sorted in place.
pub trait SequenceContainer<T>
where
    T: PartialEq,
{
    /// Adds `element` to the back of the sequence.
    ///
    /// # Errors
    /// If the sequence cannot grow, this returns an error holding `element`.
    fn append(&mut self, element: T) -> Result<(), ListError<T>>;

    /// Inserts `element` at `index`, moving the elements at and after it back by one.
    ///
    /// # Errors
    /// If `index` is greater than the size or the sequence cannot grow, this returns an error
    /// holding `element`.
    fn insert_at(&mut self, index: usize, element: T) -> Result<(), ListError<T>>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool;

    /// Finds the first element equal to `element`.
    fn find_first(&self, element: &T) -> Option<&T>;

    /// Removes the first element equal to `element`, returning whether one was found.
    fn remove(&mut self, element: &T) -> bool;

    /// Removes every element.
    fn clear(&mut self);

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    /// If `index` is not less than the size, this returns an error holding `element`.
    fn set(&mut self, index: usize, element: T) -> Result<T, ListError<T>>;

    #[cfg(feature = "std")]
    /// Sorts the inclusive range `from..=to` in ascending order.
    ///
    /// # Errors
    /// If the range is out of bounds or inverted, or two elements cannot be compared.
    fn sort(&mut self, from: usize, to: usize) -> Result<(), ListError>
    where
        T: PartialOrd;

    #[cfg(feature = "std")]
    /// Sorts the inclusive range `from..=to` by `compare`.
    ///
    /// # Errors
    /// If the range is out of bounds or inverted.
    fn sort_by<F>(&mut self, from: usize, to: usize, compare: F) -> Result<(), ListError>
    where
        F: FnMut(&T, &T) -> Ordering;
}

impl<T> SequenceContainer<T> for ArrayList<T>
where
    T: PartialEq,
{
    #[inline]
    fn append(&mut self, element: T) -> Result<(), ListError<T>> {
        Self::append(self, element)
    }

    #[inline]
    fn insert_at(&mut self, index: usize, element: T) -> Result<(), ListError<T>> {
        Self::insert_at(self, index, element)
    }

    #[inline]
    fn size(&self) -> usize {
        Self::size(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn find_first(&self, element: &T) -> Option<&T> {
        Self::find_first(self, element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn set(&mut self, index: usize, element: T) -> Result<T, ListError<T>> {
        Self::set(self, index, element)
    }

    #[cfg(feature = "std")]
    #[inline]
    fn sort(&mut self, from: usize, to: usize) -> Result<(), ListError>
    where
        T: PartialOrd,
    {
        Self::sort(self, from, to)
    }

    #[cfg(feature = "std")]
    #[inline]
    fn sort_by<F>(&mut self, from: usize, to: usize, compare: F) -> Result<(), ListError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Self::sort_by(self, from, to, compare)
    }
}
