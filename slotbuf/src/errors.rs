use alloc::collections::TryReserveError;
use core::{error::Error, fmt};

#[derive(Clone, PartialEq, Eq)]
enum CapacityErrorInternal {
    Exceeded { requested: usize, max: usize },
    Full { capacity: usize },
    Alloc { requested: usize, error: TryReserveError },
}

#[derive(Clone, PartialEq, Eq)]
/// The error type returned when a buffer cannot provide the requested slots.
///
/// This can either be from a capacity beyond the policy's maximum, from writing into a full buffer,
/// or from the allocator when allocating.
pub struct CapacityError<Value = ()> {
    internal: CapacityErrorInternal,
    value: Value,
}

impl<Value> CapacityError<Value> {
    #[inline]
    /// Gets the value held in the error.
    ///
    /// This is usually from attempting to write the value into a buffer.
    pub fn into_value(self) -> Value {
        self.value
    }

    #[inline]
    /// Seperates the value from the error.
    pub fn into_parts(self) -> (Value, CapacityError) {
        (
            self.value,
            CapacityError {
                internal: self.internal,
                value: (),
            },
        )
    }

    #[inline]
    /// Applies a function `f` to the value.
    ///
    /// This maps from a [`CapacityError<Value>`] to a [`CapacityError<U>`].
    pub fn map<U, F>(self, f: F) -> CapacityError<U>
    where
        F: FnOnce(Value) -> U,
    {
        let (value, empty) = self.into_parts();
        empty.with_value(f(value))
    }

    #[must_use]
    #[inline]
    /// Gets the capacity that could not be provided.
    ///
    /// For a full buffer, this is one more than its capacity.
    pub const fn requested(&self) -> usize {
        match self.internal {
            CapacityErrorInternal::Exceeded { requested, .. }
            | CapacityErrorInternal::Alloc { requested, .. } => requested,
            CapacityErrorInternal::Full { capacity } => capacity.saturating_add(1),
        }
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if the requested capacity is above the policy's maximum.
    pub const fn is_exceeded(&self) -> bool {
        matches!(self.internal, CapacityErrorInternal::Exceeded { .. })
    }

    #[must_use]
    #[inline]
    /// Returns [`true`] if the error came from writing into a full buffer.
    pub const fn is_full(&self) -> bool {
        matches!(self.internal, CapacityErrorInternal::Full { .. })
    }
}

impl CapacityError {
    #[inline]
    /// Places a value into the error.
    pub fn with_value<Value>(self, value: Value) -> CapacityError<Value> {
        CapacityError {
            internal: self.internal,
            value,
        }
    }

    #[must_use]
    #[inline]
    /// Create a new error for a `requested` capacity above `max`.
    pub const fn new_exceeded(requested: usize, max: usize) -> Self {
        Self {
            internal: CapacityErrorInternal::Exceeded { requested, max },
            value: (),
        }
    }

    #[must_use]
    #[inline]
    /// Create a new error for a write into a buffer that is full at `capacity`.
    pub const fn new_full(capacity: usize) -> Self {
        Self {
            internal: CapacityErrorInternal::Full { capacity },
            value: (),
        }
    }

    #[must_use]
    #[inline]
    /// Create a new error from a [`TryReserveError`] and the capacity that could not be allocated.
    pub const fn new_alloc(requested: usize, source: TryReserveError) -> Self {
        Self {
            internal: CapacityErrorInternal::Alloc {
                requested,
                error: source,
            },
            value: (),
        }
    }
}

impl fmt::Debug for CapacityErrorInternal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exceeded { requested, max } => f
                .debug_struct("CapacityError::Exceeded")
                .field("requested", requested)
                .field("max", max)
                .finish(),
            Self::Full { capacity } => f
                .debug_struct("CapacityError::Full")
                .field("capacity", capacity)
                .finish(),
            Self::Alloc { requested, .. } => f
                .debug_struct("CapacityError::Alloc")
                .field("requested", requested)
                .finish_non_exhaustive(),
        }
    }
}

impl fmt::Display for CapacityErrorInternal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exceeded { requested, max } => {
                write!(f, "capacity {requested} exceeds the maximum capacity {max}")
            }
            Self::Full { capacity } => write!(f, "buffer is full (capacity: {capacity})"),
            Self::Alloc { requested, error } => {
                write!(f, "{error} (requested capacity: {requested})")
            }
        }
    }
}

impl<Value> fmt::Debug for CapacityError<Value> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.internal, f)
    }
}

impl<Value> fmt::Display for CapacityError<Value> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.internal, f)
    }
}

impl Error for CapacityErrorInternal {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc { error, .. } => Some(error),
            Self::Exceeded { .. } | Self::Full { .. } => None,
        }
    }
}

impl<Value> Error for CapacityError<Value> {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.internal.source()
    }
}

#[cfg(test)]
mod test {
    use alloc::{string::ToString, vec::Vec};

    use super::CapacityError;

    #[test]
    fn value_round_trips_through_the_error() {
        let error = CapacityError::new_full(4).with_value("kept");
        assert!(error.is_full());
        assert_eq!(error.requested(), 5);

        let (value, error) = error.into_parts();
        assert_eq!(value, "kept");
        assert_eq!(error, CapacityError::new_full(4));
    }

    #[test]
    fn map_changes_the_value_only() {
        let error = CapacityError::new_exceeded(11, 10).with_value(3_u8);
        let error = error.map(u32::from);
        assert!(error.is_exceeded());
        assert_eq!(error.into_value(), 3_u32);
    }

    #[test]
    fn display() {
        assert_eq!(
            CapacityError::new_exceeded(11, 10).to_string(),
            "capacity 11 exceeds the maximum capacity 10"
        );
        assert_eq!(
            CapacityError::new_full(3).to_string(),
            "buffer is full (capacity: 3)"
        );
    }

    #[test]
    fn allocation_failure_has_a_source() {
        use core::error::Error;

        let mut items = Vec::<u64>::new();
        let Err(source) = items.try_reserve_exact(usize::MAX) else {
            panic!("reserving usize::MAX elements should fail");
        };

        let error = CapacityError::new_alloc(usize::MAX, source);
        assert!(!error.is_exceeded());
        assert_eq!(error.requested(), usize::MAX);
        assert!(error.source().is_some());
    }
}
