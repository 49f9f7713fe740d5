use alloc::string::ToString;
use core::fmt;

use crate::Reflect;
use crate::ops::{List, Map, Pointer, Struct};
use crate::value::{RecordValue, Value, ValueMap};

// -----------------------------------------------------------------------------
// Zero

/// Returns the zero value of `T`, through [`Reflect::reflect_zero`].
///
/// # Examples
///
/// ```
/// use sk_reflect::impls::zero_of;
///
/// assert_eq!(zero_of(&String::from("abc")), "");
/// assert_eq!(zero_of(&[3_u8, 4]), [0, 0]);
/// ```
pub fn zero_of<T: Reflect>(value: &T) -> T {
    match value.reflect_zero().take::<T>() {
        Ok(zero) => zero,
        Err(_) => unreachable!("`Reflect::reflect_zero` should return the same type"),
    }
}

// -----------------------------------------------------------------------------
// Value

/// Snapshot of a struct as a [`Value::Record`], private fields included.
pub fn struct_to_value(s: &dyn Struct) -> Value {
    let info = s.struct_info();
    let mut record = RecordValue::with_capacity(info.ident(), info.field_len());
    for (field, value) in info.fields().iter().zip(s.iter_fields()) {
        record.push(field.name(), value.to_value());
    }
    Value::Record(record)
}

/// Snapshot of a list or array as a [`Value::List`].
pub fn list_to_value(list: &dyn List) -> Value {
    Value::List(list.iter().map(Reflect::to_value).collect())
}

/// Snapshot of a map as a [`Value::Map`], keys rendered through
/// [`Value`]'s `Display`.
pub fn map_to_value(map: &dyn Map) -> Value {
    Value::Map(
        map.iter()
            .map(|(key, value)| (key.to_value().to_string(), value.to_value()))
            .collect::<ValueMap>(),
    )
}

// -----------------------------------------------------------------------------
// Debug

/// The default debug formatter for [`Struct`] types.
///
/// # Examples
///
/// ```
/// use sk_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Foo { a: u8 }
///
/// let foo: &dyn Reflect = &Foo { a: 1 };
/// assert_eq!(format!("{foo:?}"), "Foo { a: 1 }");
/// ```
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let info = dyn_struct.struct_info();
    let mut debug = f.debug_struct(info.ident());
    for (field, value) in info.fields().iter().zip(dyn_struct.iter_fields()) {
        debug.field(field.name(), &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// The default debug formatter for [`List`] types.
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// The default debug formatter for [`Map`] types.
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// The default debug formatter for [`Pointer`] types: the pointee, or `None`.
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(value) => value.reflect_debug(f),
        None => f.write_str("None"),
    }
}
