//! Re-export [`HashMap`] from [hashbrown] crate, with [`FixedHashState`] as default hasher.

use hashbrown::hash_map as hb;

use super::FixedHashState;

pub use hb::{Entry, EntryRef, OccupiedEntry, VacantEntry};
pub use hb::{Drain, IntoIter, IntoKeys, IntoValues};
pub use hb::{Iter, IterMut, Keys, Values, ValuesMut};

/// A [`hashbrown::HashMap`] with a fixed hasher by default.
///
/// # Examples
///
/// ```
/// use sk_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("a", 1);
///
/// assert_eq!(map.get("a"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hb::HashMap<K, V, S>;
