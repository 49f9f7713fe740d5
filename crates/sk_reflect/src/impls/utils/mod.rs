// -----------------------------------------------------------------------------
// Modules

mod common;
mod hash_map;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use hash_map::impl_reflect_for_hashmap;

// -----------------------------------------------------------------------------
// Exports

pub use common::{list_debug, map_debug, pointer_debug, struct_debug};
pub use common::{list_to_value, map_to_value, struct_to_value};
pub use common::zero_of;
