use alloc::boxed::Box;

use crate::Reflect;

/// An iterator over the `(key, value)` entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// A [`Reflect`] subtrait for key-value maps.
///
/// Implemented for `BTreeMap`, `std` `HashMap` and the `sk_utils` `HashMap`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use sk_reflect::ops::Map;
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("a"), 1_u8);
///
/// let map_ref: &dyn Map = &map;
/// let key = String::from("a");
///
/// assert_eq!(map_ref.len(), 1);
/// assert_eq!(map_ref.get(&key).and_then(|v| v.downcast_ref::<u8>()), Some(&1));
/// ```
pub trait Map: Reflect {
    /// Returns the value of `key`.
    ///
    /// Returns `None` if `key` has a different type than the map's keys.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries, in the map's own order.
    fn iter(&self) -> MapIter<'_>;
}
