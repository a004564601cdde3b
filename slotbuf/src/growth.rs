use crate::CapacityError;

/// The largest number of slots a buffer may be asked to hold.
///
/// This is the largest positive `isize`, the limit on the length of any Rust allocation.
pub const MAX_CAPACITY: usize = usize::MAX >> 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Decides how large a buffer becomes when it has to grow.
///
/// Buffers grow by half of their current capacity. When that would overflow or pass the maximum,
/// they grow to exactly the capacity that was asked for instead.
pub struct GrowthPolicy {
    max_capacity: usize,
}

impl GrowthPolicy {
    #[must_use]
    #[inline]
    /// Creates a policy limited by [`MAX_CAPACITY`].
    pub const fn new() -> Self {
        Self {
            max_capacity: MAX_CAPACITY,
        }
    }

    #[must_use]
    #[inline]
    /// Creates a policy that never grows past `max_capacity`.
    ///
    /// Values above [`MAX_CAPACITY`] are lowered to it.
    pub const fn with_max_capacity(max_capacity: usize) -> Self {
        let max_capacity = if max_capacity < MAX_CAPACITY {
            max_capacity
        } else {
            MAX_CAPACITY
        };

        Self { max_capacity }
    }

    #[must_use]
    #[inline]
    pub const fn max_capacity(self) -> usize {
        self.max_capacity
    }

    #[inline]
    /// Checks that a buffer may hold `requested` slots.
    ///
    /// # Errors
    /// If `requested` is above the maximum capacity, this returns a [`CapacityError`].
    pub const fn check(self, requested: usize) -> Result<(), CapacityError> {
        if requested > self.max_capacity {
            Err(CapacityError::new_exceeded(requested, self.max_capacity))
        } else {
            Ok(())
        }
    }

    /// Calculates the capacity a buffer of `current` slots grows to when it needs at least `required`.
    ///
    /// # Errors
    /// If `required` is above the maximum capacity, this returns a [`CapacityError`].
    pub fn grown_capacity(self, current: usize, required: usize) -> Result<usize, CapacityError> {
        self.check(required)?;

        let grown = current
            .checked_add(current >> 1)
            .filter(|&grown| grown <= self.max_capacity)
            .unwrap_or(required);

        Ok(grown.max(required))
    }
}

impl Default for GrowthPolicy {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
