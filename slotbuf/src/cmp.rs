use core::hash::{Hash, Hasher};

use crate::SlotBuffer;

// Only occupied slots take part; two buffers with different capacities can be equal.

impl<T, U> PartialEq<SlotBuffer<U>> for SlotBuffer<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &SlotBuffer<U>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T> Eq for SlotBuffer<T> where T: Eq {}

impl<T> Hash for SlotBuffer<T>
where
    T: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
