//! In-place randomized quicksort over an inclusive range of an [`ArrayList`].
//!
//! Partitioning follows Hoare's scheme around a pivot picked uniformly at random from the range.
//! Picking a fixed position instead makes sorted or reversed input quadratic.

use core::cmp::Ordering;

use rand::Rng;

use crate::{ArrayList, ListError};

impl<T> ArrayList<T> {
    /// Checks an inclusive sort range and returns whether it holds more than one element.
    fn check_sort_range(&self, from: usize, to: usize) -> Result<bool, ListError> {
        let len = self.len();
        if to >= len {
            return Err(ListError::index_out_of_range(to, len));
        }
        if from > to {
            return Err(ListError::inverted_range(from, to));
        }

        Ok(from != to && self.capacity() > 1)
    }

    #[cfg(feature = "std")]
    /// Sorts the elements from `from` to `to`, both inclusive, in ascending order.
    ///
    /// Pivots are drawn from the thread-local random number generator. Use
    /// [`ArrayList::sort_with_rng`] to supply the generator.
    ///
    /// # Errors
    /// - [`IndexOutOfRange`](crate::ErrorKind::IndexOutOfRange) if `to` is not less than the
    ///   length.
    /// - [`InvalidArgument`](crate::ErrorKind::InvalidArgument) if `from` is greater than `to`.
    /// - [`IncomparableElements`](crate::ErrorKind::IncomparableElements) if two elements have no
    ///   ordering, like a `NaN`. The range is left partially sorted.
    pub fn sort(&mut self, from: usize, to: usize) -> Result<(), ListError>
    where
        T: PartialOrd,
    {
        self.sort_with_rng(from, to, &mut rand::rng())
    }

    #[cfg(feature = "std")]
    /// Sorts the elements from `from` to `to`, both inclusive, by `compare`.
    ///
    /// Pivots are drawn from the thread-local random number generator. Use
    /// [`ArrayList::sort_by_with_rng`] to supply the generator.
    ///
    /// # Errors
    /// - [`IndexOutOfRange`](crate::ErrorKind::IndexOutOfRange) if `to` is not less than the
    ///   length.
    /// - [`InvalidArgument`](crate::ErrorKind::InvalidArgument) if `from` is greater than `to`.
    pub fn sort_by<F>(&mut self, from: usize, to: usize, compare: F) -> Result<(), ListError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_by_with_rng(from, to, &mut rand::rng(), compare)
    }

    /// Sorts the elements from `from` to `to`, both inclusive, in ascending order, drawing pivots
    /// from `rng`.
    ///
    /// # Errors
    /// See [`ArrayList::sort`].
    pub fn sort_with_rng<R>(&mut self, from: usize, to: usize, rng: &mut R) -> Result<(), ListError>
    where
        T: PartialOrd,
        R: Rng,
    {
        if !self.check_sort_range(from, to)? {
            return Ok(());
        }

        quicksort(
            self.as_mut_slice(),
            from,
            to,
            rng,
            &mut |left: &T, right: &T| left.partial_cmp(right),
        )
    }

    /// Sorts the elements from `from` to `to`, both inclusive, by `compare`, drawing pivots from
    /// `rng`.
    ///
    /// # Errors
    /// See [`ArrayList::sort_by`].
    pub fn sort_by_with_rng<R, F>(
        &mut self,
        from: usize,
        to: usize,
        rng: &mut R,
        mut compare: F,
    ) -> Result<(), ListError>
    where
        R: Rng,
        F: FnMut(&T, &T) -> Ordering,
    {
        if !self.check_sort_range(from, to)? {
            return Ok(());
        }

        quicksort(
            self.as_mut_slice(),
            from,
            to,
            rng,
            &mut |left: &T, right: &T| Some(compare(left, right)),
        )
    }
}

fn quicksort<T, R, F>(
    items: &mut [T],
    low: usize,
    high: usize,
    rng: &mut R,
    compare: &mut F,
) -> Result<(), ListError>
where
    R: Rng,
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let (i, j) = partition(items, low, high, rng, compare)?;

    if low < j {
        quicksort(items, low, j, rng, compare)?;
    }
    if i < high {
        quicksort(items, i, high, rng, compare)?;
    }
    Ok(())
}

/// Partitions `items[low..=high]` and returns the cursors `(i, j)`.
///
/// Afterwards every element in `low..=j` is no greater than the pivot and every element in
/// `i..=high` is no less than it.
fn partition<T, R, F>(
    items: &mut [T],
    low: usize,
    high: usize,
    rng: &mut R,
    compare: &mut F,
) -> Result<(usize, usize), ListError>
where
    R: Rng,
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    // The pivot is tracked by position so it can be swapped along with the other elements.
    let mut pivot = rng.random_range(low..=high);
    let mut i = low;
    let mut j = high;

    while i <= j {
        // The bounds only matter for comparators that are not a total order.
        while i < high && compare_to_pivot(items, i, pivot, compare)?.is_lt() {
            i += 1;
        }
        while j > low && compare_to_pivot(items, j, pivot, compare)?.is_gt() {
            j -= 1;
        }

        if i <= j {
            items.swap(i, j);
            if pivot == i {
                pivot = j;
            } else if pivot == j {
                pivot = i;
            }

            i += 1;
            // `j` would step below `low`, which leaves nothing on the left to sort.
            if j == 0 {
                break;
            }
            j -= 1;
        }
    }

    Ok((i, j))
}

fn compare_to_pivot<T, F>(
    items: &[T],
    index: usize,
    pivot: usize,
    compare: &mut F,
) -> Result<Ordering, ListError>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    compare(&items[index], &items[pivot]).ok_or(ListError::incomparable(index, pivot))
}
