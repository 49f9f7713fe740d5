//! The generic value tree.
//!
//! [`Value`] is what record projections produce: an exhaustive tagged
//! variant over scalars, ordered lists, string-keyed maps and raw record
//! snapshots. It owns all of its data and holds no reference back to the
//! value it was taken from.
//!
//! Encoding is left to the caller, `Value` implements
//! [`serde_core::Serialize`] for that purpose.

// -----------------------------------------------------------------------------
// Modules

mod record;
mod ser;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use record::RecordValue;
pub use value::{Value, ValueMap};
