use core::{error::Error, fmt};

use slotbuf::CapacityError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The category of a [`ListError`].
pub enum ErrorKind {
    /// An argument was invalid on its own, like an inverted sort range.
    InvalidArgument,
    /// An index was outside of the list.
    IndexOutOfRange,
    /// The list could not grow to hold another element.
    CapacityExceeded,
    /// An absent value was given where a present one is required.
    NullArgument,
    /// Two elements had no ordering between them.
    IncomparableElements,
}

#[derive(Clone, PartialEq, Eq)]
enum ListErrorInternal {
    InvalidCapacity { requested: usize, max: usize },
    InvertedRange { from: usize, to: usize },
    IndexOutOfRange { index: usize, len: usize },
    Capacity { error: CapacityError },
    NullArgument,
    Incomparable { left: usize, right: usize },
}

#[derive(Clone, PartialEq, Eq)]
/// The error type returned by fallible [`ArrayList`](crate::ArrayList) operations.
///
/// Operations that take ownership of an element hand it back inside the error, see
/// [`ListError::into_value`].
pub struct ListError<Value = ()> {
    internal: ListErrorInternal,
    value: Value,
}

impl ListErrorInternal {
    const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCapacity { .. } | Self::InvertedRange { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::Capacity { .. } => ErrorKind::CapacityExceeded,
            Self::NullArgument => ErrorKind::NullArgument,
            Self::Incomparable { .. } => ErrorKind::IncomparableElements,
        }
    }
}

impl<Value> ListError<Value> {
    #[must_use]
    #[inline]
    /// Gets the category of the error.
    pub const fn kind(&self) -> ErrorKind {
        self.internal.kind()
    }

    #[must_use]
    #[inline]
    /// Gets the index that was out of range, if that is what went wrong.
    pub const fn index(&self) -> Option<usize> {
        match self.internal {
            ListErrorInternal::IndexOutOfRange { index, .. } => Some(index),
            _ => None,
        }
    }

    #[inline]
    /// Gets the value held in the error.
    ///
    /// This is the element that the failed operation was given.
    pub fn into_value(self) -> Value {
        self.value
    }

    #[inline]
    /// Seperates the value from the error.
    pub fn into_parts(self) -> (Value, ListError) {
        (
            self.value,
            ListError {
                internal: self.internal,
                value: (),
            },
        )
    }

    #[inline]
    /// Applies a function `f` to the value.
    ///
    /// This maps from a [`ListError<Value>`] to a [`ListError<U>`].
    pub fn map<U, F>(self, f: F) -> ListError<U>
    where
        F: FnOnce(Value) -> U,
    {
        let (value, empty) = self.into_parts();
        empty.with_value(f(value))
    }

    /// Handles the error by panicking with its message.
    ///
    /// This is used where an operation cannot report errors, like [`Extend`].
    pub fn handle(self) -> ! {
        panic!("{}", self.internal)
    }
}

impl ListError {
    #[inline]
    /// Places a value into the error.
    pub fn with_value<Value>(self, value: Value) -> ListError<Value> {
        ListError {
            internal: self.internal,
            value,
        }
    }

    pub(crate) const fn invalid_capacity(requested: usize, max: usize) -> Self {
        Self {
            internal: ListErrorInternal::InvalidCapacity { requested, max },
            value: (),
        }
    }

    pub(crate) const fn inverted_range(from: usize, to: usize) -> Self {
        Self {
            internal: ListErrorInternal::InvertedRange { from, to },
            value: (),
        }
    }

    pub(crate) const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self {
            internal: ListErrorInternal::IndexOutOfRange { index, len },
            value: (),
        }
    }

    pub(crate) const fn null_argument() -> Self {
        Self {
            internal: ListErrorInternal::NullArgument,
            value: (),
        }
    }

    pub(crate) const fn incomparable(left: usize, right: usize) -> Self {
        Self {
            internal: ListErrorInternal::Incomparable { left, right },
            value: (),
        }
    }
}

impl fmt::Debug for ListErrorInternal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested, max } => f
                .debug_struct("ListError::InvalidCapacity")
                .field("requested", requested)
                .field("max", max)
                .finish(),
            Self::InvertedRange { from, to } => f
                .debug_struct("ListError::InvertedRange")
                .field("from", from)
                .field("to", to)
                .finish(),
            Self::IndexOutOfRange { index, len } => f
                .debug_struct("ListError::IndexOutOfRange")
                .field("index", index)
                .field("len", len)
                .finish(),
            Self::Capacity { error } => f.debug_tuple("ListError::Capacity").field(error).finish(),
            Self::NullArgument => f.write_str("ListError::NullArgument"),
            Self::Incomparable { left, right } => f
                .debug_struct("ListError::Incomparable")
                .field("left", left)
                .field("right", right)
                .finish(),
        }
    }
}

impl fmt::Display for ListErrorInternal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested, max } => write!(
                f,
                "initial capacity {requested} exceeds the maximum capacity {max}"
            ),
            Self::InvertedRange { from, to } => {
                write!(f, "range start {from} is greater than range end {to}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Capacity { error } => write!(f, "cannot grow the list: {error}"),
            Self::NullArgument => f.write_str("cannot search for an absent value"),
            Self::Incomparable { left, right } => {
                write!(f, "elements at {left} and {right} cannot be compared")
            }
        }
    }
}

impl<Value> fmt::Debug for ListError<Value> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.internal, f)
    }
}

impl<Value> fmt::Display for ListError<Value> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.internal, f)
    }
}

impl<Value> Error for ListError<Value> {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.internal {
            ListErrorInternal::Capacity { error } => Some(error),
            _ => None,
        }
    }
}

impl<Value> From<CapacityError<Value>> for ListError<Value> {
    #[inline]
    fn from(value: CapacityError<Value>) -> Self {
        let (value, error) = value.into_parts();
        Self {
            internal: ListErrorInternal::Capacity { error },
            value,
        }
    }
}

#[cfg(test)]
mod test {
    use alloc::string::ToString;

    use slotbuf::CapacityError;

    use super::{ErrorKind, ListError};

    #[test]
    fn kinds() {
        assert_eq!(
            ListError::invalid_capacity(11, 10).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ListError::inverted_range(3, 2).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ListError::index_out_of_range(8, 8).kind(),
            ErrorKind::IndexOutOfRange
        );
        assert_eq!(
            ListError::from(CapacityError::new_exceeded(9, 8)).kind(),
            ErrorKind::CapacityExceeded
        );
        assert_eq!(ListError::null_argument().kind(), ErrorKind::NullArgument);
        assert_eq!(
            ListError::incomparable(0, 1).kind(),
            ErrorKind::IncomparableElements
        );
    }

    #[test]
    fn capacity_errors_keep_their_value_and_source() {
        use core::error::Error;

        let error = ListError::from(CapacityError::new_full(2).with_value('v'));
        assert!(error.source().is_some());
        assert_eq!(error.into_value(), 'v');
    }

    #[test]
    fn display() {
        assert_eq!(
            ListError::index_out_of_range(9, 8).to_string(),
            "index 9 out of range for length 8"
        );
        assert_eq!(
            ListError::inverted_range(4, 1).to_string(),
            "range start 4 is greater than range end 1"
        );
        assert_eq!(
            ListError::from(CapacityError::new_exceeded(9, 8)).to_string(),
            "cannot grow the list: capacity 9 exceeds the maximum capacity 8"
        );
    }

    #[test]
    fn index_is_only_reported_for_range_errors() {
        assert_eq!(ListError::index_out_of_range(5, 2).index(), Some(5));
        assert_eq!(ListError::null_argument().index(), None);
    }

    #[test]
    #[should_panic(expected = "cannot search for an absent value")]
    fn handle_panics_with_the_message() {
        ListError::null_argument().with_value(0_u8).handle();
    }
}
