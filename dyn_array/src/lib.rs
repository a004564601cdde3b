#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(debug_assertions), warn(clippy::panic_in_result_fn))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use core::{
    mem,
    ops::{Index, IndexMut},
};

use slotbuf::{CapacityError, SlotBuffer};

mod cmp;
mod container;
mod errors;
mod fmt;
pub mod iter;
mod nullable;
mod sort;

pub use container::SequenceContainer;
pub use errors::{ErrorKind, ListError};
use iter::{Iter, IterMut};
pub use slotbuf::{GrowthPolicy, MAX_CAPACITY};

/// The capacity of a new or cleared [`ArrayList`].
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Clone)]
/// A list of `T` stored in one contiguous, growable buffer.
///
/// The buffer grows by half of its capacity whenever an element is added to a full list, and is
/// only ever shrunk by [`ArrayList::clear`].
pub struct ArrayList<T> {
    slots: SlotBuffer<T>,
    growth: GrowthPolicy,
}

impl<T> ArrayList<T> {
    #[must_use]
    #[inline]
    /// Creates an empty [`ArrayList`] with a capacity of [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            slots: SlotBuffer::with_capacity(DEFAULT_CAPACITY),
            growth: GrowthPolicy::new(),
        }
    }

    #[inline]
    /// Attempts to create an empty [`ArrayList`] with exactly `initial_capacity` slots.
    ///
    /// # Errors
    /// If `initial_capacity` is above [`MAX_CAPACITY`] this returns an
    /// [`InvalidArgument`](ErrorKind::InvalidArgument) error, and if allocation fails a
    /// [`CapacityExceeded`](ErrorKind::CapacityExceeded) error.
    pub fn try_with_capacity(initial_capacity: usize) -> Result<Self, ListError> {
        Self::try_with_policy(initial_capacity, GrowthPolicy::new())
    }

    /// Attempts to create an empty [`ArrayList`] with exactly `initial_capacity` slots that grows
    /// according to `growth`.
    ///
    /// # Errors
    /// If `initial_capacity` is above the policy's maximum this returns an
    /// [`InvalidArgument`](ErrorKind::InvalidArgument) error, and if allocation fails a
    /// [`CapacityExceeded`](ErrorKind::CapacityExceeded) error.
    pub fn try_with_policy(initial_capacity: usize, growth: GrowthPolicy) -> Result<Self, ListError> {
        if initial_capacity > growth.max_capacity() {
            return Err(ListError::invalid_capacity(
                initial_capacity,
                growth.max_capacity(),
            ));
        }

        let slots = SlotBuffer::try_with_capacity(initial_capacity, growth)?;
        Ok(Self { slots, growth })
    }

    #[must_use]
    #[inline]
    /// Gets the number of elements in the list.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    #[inline]
    /// Gets the number of elements in the list.
    ///
    /// This is the same as [`ArrayList::len`].
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    #[inline]
    /// Gets the number of elements the list can hold before it has to grow.
    pub const fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[must_use]
    #[inline]
    pub const fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// Makes room for one more element, moving the elements into a larger buffer if the list is
    /// full.
    fn try_reserve_one(&mut self) -> Result<(), CapacityError> {
        if !self.slots.is_full() {
            return Ok(());
        }

        let required = self.slots.len() + 1;
        let capacity = self
            .growth
            .grown_capacity(self.slots.capacity(), required)?;
        self.slots.try_regrow(capacity)
    }

    /// Attempts to add `element` to the back of the list.
    ///
    /// # Errors
    /// If the list is full and cannot grow, this returns a
    /// [`CapacityExceeded`](ErrorKind::CapacityExceeded) error holding `element`. The list is
    /// unchanged.
    pub fn append(&mut self, element: T) -> Result<(), ListError<T>> {
        if let Err(error) = self.try_reserve_one() {
            return Err(ListError::from(error).with_value(element));
        }

        self.slots.try_push(element)?;
        Ok(())
    }

    /// Attempts to insert `element` at `index`, shifting the elements at and after `index` towards
    /// the back.
    ///
    /// An `index` equal to the length appends.
    ///
    /// # Errors
    /// If `index` is greater than the length this returns an
    /// [`IndexOutOfRange`](ErrorKind::IndexOutOfRange) error, and if the list cannot grow a
    /// [`CapacityExceeded`](ErrorKind::CapacityExceeded) error. Both hold `element` and leave the
    /// list unchanged.
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<(), ListError<T>> {
        let len = self.len();
        if index > len {
            return Err(ListError::index_out_of_range(index, len).with_value(element));
        }

        if let Err(error) = self.try_reserve_one() {
            return Err(ListError::from(error).with_value(element));
        }

        self.slots.try_insert(index, element)?;
        Ok(())
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    /// If `index` is not less than the length, this returns an
    /// [`IndexOutOfRange`](ErrorKind::IndexOutOfRange) error.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let len = self.len();
        self.slots
            .get(index)
            .ok_or(ListError::index_out_of_range(index, len))
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// If `index` is not less than the length, this returns an
    /// [`IndexOutOfRange`](ErrorKind::IndexOutOfRange) error.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len();
        self.slots
            .get_mut(index)
            .ok_or(ListError::index_out_of_range(index, len))
    }

    /// Replaces the element at `index` with `element` and returns the old one.
    ///
    /// # Errors
    /// If `index` is not less than the length, this returns an
    /// [`IndexOutOfRange`](ErrorKind::IndexOutOfRange) error holding `element`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, ListError<T>> {
        let len = self.len();
        match self.slots.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, element)),
            None => Err(ListError::index_out_of_range(index, len).with_value(element)),
        }
    }

    #[must_use]
    /// Finds the first element equal to `element`.
    pub fn find_first(&self, element: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|item| *item == element)
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_first(element).is_some()
    }

    /// Removes the first element equal to `element`, shifting the elements after it towards the
    /// front.
    ///
    /// Returns [`true`] if an element was removed and [`false`] if none matched.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.iter().position(|item| item == element) else {
            return false;
        };

        drop(self.slots.remove(index));
        true
    }

    /// Drops every element and replaces the buffer with one of [`DEFAULT_CAPACITY`], or of the
    /// growth policy's maximum if that is smaller.
    ///
    /// Any capacity chosen at construction is not kept, the growth policy is.
    pub fn clear(&mut self) {
        self.slots.reset(DEFAULT_CAPACITY.min(self.growth.max_capacity()));
    }

    #[must_use]
    #[inline]
    /// Gets the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    #[must_use]
    #[inline]
    /// Gets the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.slots.as_mut_slice()
    }

    #[must_use]
    #[inline]
    /// Creates an iterator over references to the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots.as_slice())
    }

    #[must_use]
    #[inline]
    /// Creates an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.slots.as_mut_slice())
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert!(self.len() <= self.capacity());
        assert!(self.capacity() <= self.growth.max_capacity());
    }
}

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.slots.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod test {
    use alloc::rc::Rc;

    use crate::{ArrayList, ErrorKind, GrowthPolicy, DEFAULT_CAPACITY};

    fn sample() -> ArrayList<i32> {
        [1, 1, 1, 1, 2, 8, 5, 4].into_iter().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list = ArrayList::<u8>::new();
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        list.check_invariants();
    }

    #[test]
    fn exact_initial_capacity() {
        let list = ArrayList::<u8>::try_with_capacity(3).unwrap();
        assert_eq!(list.capacity(), 3);

        let list = ArrayList::<u8>::try_with_capacity(0).unwrap();
        assert_eq!(list.capacity(), 0);
    }

    #[test]
    fn initial_capacity_above_the_maximum_is_invalid() {
        let error = ArrayList::<u8>::try_with_capacity(usize::MAX).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);

        let policy = GrowthPolicy::with_max_capacity(4);
        let error = ArrayList::<u8>::try_with_policy(5, policy).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn append_adds_to_the_back() {
        let mut list = sample();
        for i in 0..10 {
            list.append(i).unwrap();
            assert_eq!(list.get(list.len() - 1), Ok(&i));
        }
        assert_eq!(list.len(), 18);
        list.check_invariants();
    }

    #[test]
    fn append_grows_by_half() {
        let mut list = ArrayList::new();
        for i in 0..DEFAULT_CAPACITY {
            list.append(i).unwrap();
        }
        assert_eq!(list.capacity(), 10);

        list.append(10).unwrap();
        assert_eq!(list.capacity(), 15);

        for i in 11..16 {
            list.append(i).unwrap();
        }
        assert_eq!(list.capacity(), 22);
        assert!(list.iter().copied().eq(0..16));
    }

    #[test]
    fn append_from_zero_capacity() {
        let mut list = ArrayList::try_with_capacity(0).unwrap();
        list.append('a').unwrap();
        assert_eq!(list.capacity(), 1);
        list.append('b').unwrap();
        assert_eq!(list.capacity(), 2);
        list.append('c').unwrap();
        assert_eq!(list.capacity(), 3);
        assert_eq!(list, ['a', 'b', 'c']);
    }

    #[test]
    fn append_past_the_maximum_fails_and_returns_the_element() {
        let policy = GrowthPolicy::with_max_capacity(3);
        let mut list = ArrayList::try_with_policy(2, policy).unwrap();
        list.append(1).unwrap();
        list.append(2).unwrap();
        list.append(3).unwrap();
        assert_eq!(list.capacity(), 3);

        let error = list.append(4).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(error.into_value(), 4);
        assert_eq!(list, [1, 2, 3]);
        assert_eq!(list.capacity(), 3);
        list.check_invariants();
    }

    #[test]
    fn insert_at_front_shifts_the_rest() {
        let mut list = sample();
        list.insert_at(0, 15).unwrap();
        assert_eq!(list.get(0), Ok(&15));
        assert_eq!(list, [15, 1, 1, 1, 1, 2, 8, 5, 4]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut list = sample();
        let len = list.len();
        list.insert_at(len, 5).unwrap();
        assert_eq!(list.get(len), Ok(&5));
    }

    #[test]
    fn insert_past_len_fails_and_returns_the_element() {
        let mut list = sample();
        let len = list.len();

        let error = list.insert_at(len + 1, 5).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(error.index(), Some(len + 1));
        assert_eq!(error.into_value(), 5);
        assert_eq!(list, sample());
    }

    #[test]
    fn insert_into_a_full_list_grows_it() {
        let mut list = ArrayList::try_with_capacity(2).unwrap();
        list.append(2).unwrap();
        list.append(3).unwrap();
        list.insert_at(0, 1).unwrap();
        assert_eq!(list.capacity(), 3);
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn insert_into_a_full_default_list_grows_by_half() {
        let mut list = ArrayList::new();
        list.extend(1..=10);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);

        list.insert_at(0, 0).unwrap();
        assert_eq!(list.capacity(), 15);
        assert_eq!(list, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        list.check_invariants();
    }

    #[test]
    fn get_by_index() {
        let list = sample();
        assert_eq!(list.get(4), Ok(&2));
        assert_eq!(list[5], 8);
        assert_eq!(list.get(8).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    }

    #[test]
    fn get_mut_by_index() {
        let mut list = sample();
        *list.get_mut(0).unwrap() = 7;
        list[1] = 6;
        assert_eq!(list.get(0), Ok(&7));
        assert_eq!(list.get(1), Ok(&6));
        assert!(list.get_mut(8).is_err());
    }

    #[test]
    fn find_first_returns_the_first_match() {
        let list = sample();
        assert_eq!(list.find_first(&2), Some(&2));
        assert_eq!(list.find_first(&3), None);
        assert!(list.contains(&8));
        assert!(!list.contains(&9));
    }

    #[test]
    fn remove_first_occurrence() {
        let mut list = sample();
        assert!(list.remove(&1));
        assert_eq!(list.len(), 7);
        assert_eq!(list, [1, 1, 1, 2, 8, 5, 4]);

        assert!(list.remove(&4));
        assert_eq!(list, [1, 1, 1, 2, 8, 5]);
    }

    #[test]
    fn remove_missing_element_changes_nothing() {
        let mut list = sample();
        assert!(!list.remove(&15));
        assert_eq!(list, sample());
    }

    #[test]
    fn remove_releases_the_element() {
        let shared = Rc::new(());
        let mut list = ArrayList::new();
        list.append(Rc::clone(&shared)).unwrap();
        assert_eq!(Rc::strong_count(&shared), 2);

        assert!(list.remove(&shared));
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn clear_resets_to_the_default_capacity() {
        let mut list = ArrayList::try_with_capacity(64).unwrap();
        list.extend(0..40);

        list.clear();
        assert_eq!(list.size(), 0);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        list.check_invariants();
    }

    #[test]
    fn clear_keeps_the_growth_policy() {
        let policy = GrowthPolicy::with_max_capacity(12);
        let mut list = ArrayList::try_with_policy(12, policy).unwrap();
        list.extend(0..12);
        list.clear();
        assert_eq!(list.growth_policy(), policy);
        list.check_invariants();
    }

    #[test]
    fn clear_never_passes_the_maximum() {
        let policy = GrowthPolicy::with_max_capacity(3);
        let mut list = ArrayList::try_with_policy(3, policy).unwrap();
        list.extend(0..3);
        assert_eq!(list.append(3).unwrap_err().kind(), ErrorKind::CapacityExceeded);

        list.clear();
        assert_eq!(list.capacity(), 3);
        list.check_invariants();

        list.extend(0..3);
        let error = list.append(3).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(error.into_value(), 3);
        assert_eq!(list, [0, 1, 2]);
        list.check_invariants();
    }

    #[test]
    fn set_replaces_and_returns_the_old_element() {
        let mut list = sample();
        assert_eq!(list.set(0, 5), Ok(1));
        assert_eq!(list.get(0), Ok(&5));

        let error = list.set(8, 9).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(error.into_value(), 9);
    }

    #[test]
    fn size_and_emptiness() {
        let list = sample();
        assert_eq!(list.size(), 8);
        assert!(!list.is_empty());
    }

    #[test]
    fn clone_keeps_elements_and_capacity() {
        let mut list = ArrayList::try_with_capacity(20).unwrap();
        list.extend(["a", "b"]);
        let clone = list.clone();
        assert_eq!(clone, list);
        assert_eq!(clone.capacity(), 20);
    }
}
