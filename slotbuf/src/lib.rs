#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use alloc::vec::Vec;

mod cmp;
mod errors;
mod fmt;
mod growth;
pub use errors::CapacityError;
pub use growth::{GrowthPolicy, MAX_CAPACITY};

/// Contiguous storage for up to `capacity` values of `T`.
///
/// The values always form a prefix of the slots; the slots after them hold nothing.
/// The buffer never reallocates by itself: writing into a full buffer fails and
/// [`SlotBuffer::try_regrow`] is the only way to make room.
pub struct SlotBuffer<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> SlotBuffer<T> {
    #[must_use]
    #[inline]
    /// Creates an empty buffer with exactly `capacity` slots.
    ///
    /// # Panics
    /// Panics if the allocation size overflows `isize::MAX` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Attempts to create an empty buffer with exactly `capacity` slots.
    ///
    /// # Errors
    /// If `capacity` is above the `policy`'s maximum or allocation fails, this will return a
    /// [`CapacityError`].
    pub fn try_with_capacity(capacity: usize, policy: GrowthPolicy) -> Result<Self, CapacityError> {
        policy.check(capacity)?;
        let items = Self::try_allocate(capacity)?;
        Ok(Self { items, capacity })
    }

    fn try_allocate(capacity: usize) -> Result<Vec<T>, CapacityError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|error| CapacityError::new_alloc(capacity, error))?;
        Ok(items)
    }

    #[must_use]
    #[inline]
    /// Gets the number of slots in the buffer.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    #[inline]
    /// Gets the number of occupied slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    #[must_use]
    #[inline]
    /// Gets the occupied slots.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    #[inline]
    /// Gets the occupied slots mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[must_use]
    #[inline]
    /// Gets a reference to the value at `index`, or [`None`] if that slot is unoccupied.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    #[inline]
    /// Gets a mutable reference to the value at `index`, or [`None`] if that slot is unoccupied.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Attempts to write `value` into the first unoccupied slot.
    ///
    /// # Errors
    /// If the buffer is full, this will return a [`CapacityError`] holding `value`.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new_full(self.capacity).with_value(value));
        }

        self.items.push(value);
        debug_assert!(self.items.len() <= self.capacity);
        Ok(())
    }

    /// Attempts to write `value` at `index`, shifting the values at and after `index` one slot
    /// towards the back.
    ///
    /// # Errors
    /// If the buffer is full, this will return a [`CapacityError`] holding `value`.
    ///
    /// # Panics
    /// Panics if `index` is greater than the number of occupied slots.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), CapacityError<T>> {
        assert!(
            index <= self.items.len(),
            "insertion index (is {index}) should be <= len (is {})",
            self.items.len()
        );

        if self.is_full() {
            return Err(CapacityError::new_full(self.capacity).with_value(value));
        }

        self.items.insert(index, value);
        debug_assert!(self.items.len() <= self.capacity);
        Ok(())
    }

    /// Takes the value at `index` out of the buffer, shifting the values after it one slot towards
    /// the front.
    ///
    /// The last occupied slot is left empty.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Attempts to move the values into a new allocation of `new_capacity` slots.
    ///
    /// The old allocation is released afterwards. Buffers never shrink, so this does nothing if
    /// `new_capacity` is not larger than the current capacity.
    ///
    /// # Errors
    /// If allocation fails, this will return a [`CapacityError`] and the buffer is unchanged.
    pub fn try_regrow(&mut self, new_capacity: usize) -> Result<(), CapacityError> {
        if new_capacity <= self.capacity {
            return Ok(());
        }

        let mut items = Self::try_allocate(new_capacity)?;
        items.append(&mut self.items);

        self.items = items;
        self.capacity = new_capacity;
        debug_assert!(self.items.len() <= self.capacity);
        Ok(())
    }

    /// Attempts to drop every value and replace the allocation with a fresh one of `capacity`
    /// slots.
    ///
    /// # Errors
    /// If allocation fails, this will return a [`CapacityError`] and the buffer is unchanged.
    pub fn try_reset(&mut self, capacity: usize) -> Result<(), CapacityError> {
        let items = Self::try_allocate(capacity)?;
        *self = Self { items, capacity };
        Ok(())
    }

    /// Drops every value and replaces the allocation with a fresh one of `capacity` slots.
    ///
    /// If that allocation fails, the buffer is left empty with no slots at all.
    pub fn reset(&mut self, capacity: usize) {
        if self.try_reset(capacity).is_err() {
            *self = Self::with_capacity(0);
        }
    }
}

impl<T> Clone for SlotBuffer<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);

        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> IntoIterator for SlotBuffer<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
