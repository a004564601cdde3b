use crate::{ArrayList, ListError};

impl<U> ArrayList<Option<U>>
where
    U: PartialEq,
{
    /// Finds the first present element equal to `element`.
    ///
    /// Stored [`None`]s are skipped, and "not found" is the outer [`None`].
    ///
    /// # Errors
    /// Searching for an absent value is rejected with a
    /// [`NullArgument`](crate::ErrorKind::NullArgument) error. To match stored [`None`]s use
    /// [`ArrayList::find_first`] or [`ArrayList::remove`].
    pub fn find_first_present(&self, element: Option<&U>) -> Result<Option<&U>, ListError> {
        let element = element.ok_or(ListError::null_argument())?;
        Ok(self.iter().flatten().find(|&item| item == element))
    }

    #[must_use]
    /// Counts the stored [`None`]s.
    pub fn count_absent(&self) -> usize {
        self.iter().filter(|item| item.is_none()).count()
    }
}
