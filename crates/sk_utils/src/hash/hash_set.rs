//! Re-export [`HashSet`] from [hashbrown] crate, with [`FixedHashState`] as default hasher.

use hashbrown::hash_set as hb;

use super::FixedHashState;

pub use hb::{Difference, Intersection, SymmetricDifference, Union};
pub use hb::{Drain, IntoIter, Iter};

/// A [`hashbrown::HashSet`] with a fixed hasher by default.
///
/// # Examples
///
/// ```
/// use sk_utils::hash::HashSet;
///
/// let mut set: HashSet<u64> = HashSet::default();
///
/// assert!(set.insert(7));
/// assert!(!set.insert(7));
/// ```
pub type HashSet<T, S = FixedHashState> = hb::HashSet<T, S>;
