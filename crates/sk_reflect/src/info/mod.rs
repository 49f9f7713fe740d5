//! Provide static type information.
//!
//! [`Typed::type_info`] describes a type without any instance: its
//! [`ReflectKind`], its [`Type`] identity and, for composite kinds, the
//! types it contains. Structs list their [`NamedField`]s, which carry the
//! declared name, visibility, embedded flag and raw tag table.
//!
//! Container infos store nested types as function pointers, so building
//! the info of `Vec<Vec<T>>` stays lazy and never recurses eagerly.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use kind::ReflectKind;
pub use list_info::{ArrayInfo, ListInfo};
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{Type, TypeInfo};
pub use typed::{DynamicTyped, Typed};
