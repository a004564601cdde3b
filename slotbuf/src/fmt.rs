use core::fmt::{Debug, Formatter, Result};

use crate::SlotBuffer;

impl<T> Debug for SlotBuffer<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("SlotBuffer")
            .field("items", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish()
    }
}
