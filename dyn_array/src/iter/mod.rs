mod into_iter;
#[expect(clippy::module_inception)]
mod iter;
mod iter_mut;

pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

use crate::ArrayList;

/// Appends every item to the back of the list.
///
/// # Panics
/// Panics if the list reaches its maximum capacity.
impl<Item> Extend<Item> for ArrayList<Item> {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        for item in iter {
            if let Err(error) = self.append(item) {
                error.handle();
            }
        }
    }
}

impl<'a, Item> Extend<&'a Item> for ArrayList<Item>
where
    Item: Copy,
{
    fn extend<T: IntoIterator<Item = &'a Item>>(&mut self, iter: T) {
        <Self as Extend<Item>>::extend(self, iter.into_iter().copied());
    }
}

impl<Item> FromIterator<Item> for ArrayList<Item> {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
