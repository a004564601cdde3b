use core::{iter::FusedIterator, slice};

use crate::ArrayList;

#[derive(Clone, Debug)]
/// An iterator over references to elements of an [`ArrayList`].
///
/// This is created by [`ArrayList::iter`].
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    #[must_use]
    #[inline]
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter(),
        }
    }

    #[must_use]
    #[inline]
    /// Gets the elements that have not been yielded yet.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<T> Default for Iter<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::new(&[])
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
