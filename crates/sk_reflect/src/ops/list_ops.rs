use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A [`Reflect`] subtrait for ordered sequences.
///
/// Implemented for `Vec<T>`, `VecDeque<T>` and `[T; N]` (the latter with
/// kind `Array`).
///
/// # Examples
///
/// ```
/// # use sk_reflect::ops::List;
/// let vec = vec![1, 2, 3];
/// let list_ref: &dyn List = &vec;
///
/// assert!(list_ref.get(0).is_some());
/// assert!(list_ref.get(3).is_none());
/// ```
pub trait List: Reflect {
    /// Returns a reference to the element at the given index, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at the given index, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements of the list.
    fn iter(&self) -> ListItemIter<'_>;
}

// -----------------------------------------------------------------------------
// List Item Iterator

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for ListItemIter<'a> {}
