use core::hash::{Hash, Hasher};

use crate::ArrayList;

// Equality and hashing only look at the elements, never at the capacity or growth policy.

impl<T, U> PartialEq<ArrayList<U>> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &ArrayList<U>) -> bool {
        self.slots == other.slots
    }
}

impl<T> Eq for ArrayList<T> where T: Eq {}

impl<T, U> PartialEq<[U]> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T> Hash for ArrayList<T>
where
    T: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slots.hash(state);
    }
}
