#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod field;
mod nested;
mod structs;

pub mod tags;

// -----------------------------------------------------------------------------
// Exports

pub use error::{FieldError, NotStructError, ProjectError};
pub use field::Field;
pub use structs::{Record, RecordMut};

use alloc::vec::Vec;

use sk_reflect::Reflect;
use sk_reflect::value::{Value, ValueMap};

/// The tag namespace a new [`Record`] reads.
pub const DEFAULT_TAG_NAME: &str = "json";

// -----------------------------------------------------------------------------
// Free functions

/// Projects a struct into a map, see [`Record::map`].
///
/// # Panics
///
/// If `value` is not a struct, or the projection fails.
#[inline]
pub fn map(value: &dyn Reflect) -> ValueMap {
    Record::new(value).map()
}

/// Projects a struct into `out`, see [`Record::fill_map`].
///
/// # Panics
///
/// If `value` is not a struct, or the projection fails.
#[inline]
pub fn fill_map(value: &dyn Reflect, out: Option<&mut ValueMap>) {
    Record::new(value).fill_map(out);
}

/// Flattens the field values of a struct, see [`Record::values`].
///
/// # Panics
///
/// If `value` is not a struct, or the projection fails.
#[inline]
pub fn values(value: &dyn Reflect) -> Vec<Value> {
    Record::new(value).values()
}

/// See [`Record::fields`].
///
/// # Panics
///
/// If `value` is not a struct.
#[inline]
pub fn fields(value: &dyn Reflect) -> Vec<Field<'_>> {
    Record::new(value).fields()
}

/// See [`Record::names`].
///
/// # Panics
///
/// If `value` is not a struct.
#[inline]
pub fn names(value: &dyn Reflect) -> Vec<&'static str> {
    Record::new(value).names()
}

/// See [`Record::field_by_name`].
///
/// # Panics
///
/// If `value` is not a struct.
#[inline]
pub fn field_by_name<'a>(value: &'a dyn Reflect, name: &str) -> Option<Field<'a>> {
    Record::new(value).field_by_name(name)
}

/// See [`Record::field`].
///
/// # Panics
///
/// If `value` is not a struct, or the field does not exist.
#[inline]
pub fn field<'a>(value: &'a dyn Reflect, name: &str) -> Field<'a> {
    Record::new(value).field(name)
}

/// See [`Record::is_zero`].
///
/// # Panics
///
/// If `value` is not a struct.
#[inline]
pub fn is_zero(value: &dyn Reflect) -> bool {
    Record::new(value).is_zero()
}

/// See [`Record::has_zero`].
///
/// # Panics
///
/// If `value` is not a struct.
#[inline]
pub fn has_zero(value: &dyn Reflect) -> bool {
    Record::new(value).has_zero()
}

/// Returns `true` if `value` is a struct, directly or through one pointer.
///
/// # Examples
///
/// ```
/// use sk_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Unit {}
///
/// assert!(sk_structs::is_struct(&Unit {}));
/// assert!(sk_structs::is_struct(&Some(Unit {})));
/// assert!(!sk_structs::is_struct(&None::<Unit>));
/// assert!(!sk_structs::is_struct(&Some(Some(Unit {}))));
/// assert!(!sk_structs::is_struct(&3));
/// ```
#[inline]
pub fn is_struct(value: &dyn Reflect) -> bool {
    structs::as_record(value).is_some()
}

/// Returns the declared type name of a struct.
///
/// # Panics
///
/// If `value` is not a struct.
#[inline]
pub fn name(value: &dyn Reflect) -> &'static str {
    Record::new(value).name()
}

