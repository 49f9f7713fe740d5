//! Provide the kind-specific views of [`Reflect`].
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`) .
//! - [`List`]: For list-like and arrays (e.g. `Vec<i32>`, `[u8; 4]`) .
//! - [`Map`]: For map-like (e.g. `BTreeMap<String, f32>`) .
//! - [`Pointer`]: For indirections (e.g. `Option<T>`, `Box<T>`) .
//!
//! Obtain them through [`Reflect::reflect_ref`] and [`Reflect::reflect_mut`].
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
//! [`Reflect::reflect_mut`]: crate::Reflect::reflect_mut

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
