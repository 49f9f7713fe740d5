//! Provide reflection for foreign types, and helpers for implementing it.
//!
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//! - `xxx_to_value`: Used to implement [`Reflect::to_value`] (e.g. [`struct_to_value`]).
//! - [`zero_of`]: typed wrapper around [`Reflect::reflect_zero`].
//!
//! ## Implemented Menu
//!
//! - scalar:
//!     - `bool`, `char`
//!     - `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`
//!     - `&'static str`, `String`
//! - core:
//!     - `Option<T>`
//!     - `[T; N]`
//! - alloc:
//!     - `Vec<T>`, `VecDeque<T>`
//!     - `BTreeMap<K, V>`
//!     - `Box<T>`, `Box<dyn Reflect>`, `Arc<T>`
//! - std: ("std" feature)
//!     - `HashMap<K, V, S>`
//! - sk_utils:
//!     - `hashbrown::HashMap<K, V, S>`
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Reflect::to_value`]: crate::Reflect::to_value
//! [`Reflect::reflect_zero`]: crate::Reflect::reflect_zero

// -----------------------------------------------------------------------------
// Modules

mod utils;

mod alloc;
mod core;
mod scalar;
mod sk_utils;

#[cfg(feature = "std")]
mod std;

// -----------------------------------------------------------------------------
// Exports

pub use utils::*;
