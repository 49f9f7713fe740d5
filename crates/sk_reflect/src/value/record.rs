use alloc::vec::Vec;
use core::fmt;

use crate::value::Value;

/// A raw snapshot of a struct value.
///
/// Holds the declared type name and every field's raw value in declaration
/// order, private fields included. No tag directive is applied.
///
/// # Examples
///
/// ```
/// use sk_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let value = Point { x: 1, y: 2 }.to_value();
/// let record = value.as_record().unwrap();
///
/// assert_eq!(record.type_ident(), "Point");
/// assert_eq!(record.get("y").and_then(|v| v.as_i64()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    type_ident: &'static str,
    fields: Vec<(&'static str, Value)>,
}

impl RecordValue {
    /// Creates an empty snapshot for the type named `type_ident`.
    #[inline]
    pub const fn new(type_ident: &'static str) -> Self {
        Self {
            type_ident,
            fields: Vec::new(),
        }
    }

    /// Creates an empty snapshot with room for `capacity` fields.
    #[inline]
    pub fn with_capacity(type_ident: &'static str, capacity: usize) -> Self {
        Self {
            type_ident,
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Appends a field.
    #[inline]
    pub fn push(&mut self, name: &'static str, value: Value) {
        self.fields.push((name, value));
    }

    /// Appends a field, builder style.
    #[inline]
    pub fn with_field(mut self, name: &'static str, value: Value) -> Self {
        self.push(name, value);
        self
    }

    /// Returns the declared type name.
    #[inline]
    pub const fn type_ident(&self) -> &'static str {
        self.type_ident
    }

    /// Returns every field in declaration order.
    #[inline]
    pub fn fields(&self) -> &[(&'static str, Value)] {
        &self.fields
    }

    /// Returns the value of the field named `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the snapshot holds no field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_ident)?;
        if self.fields.is_empty() {
            return Ok(());
        }
        f.write_str(" { ")?;
        for (index, (name, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str(" }")
    }
}
