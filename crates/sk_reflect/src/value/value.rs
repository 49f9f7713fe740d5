use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::value::RecordValue;

/// A string-keyed map of values, ordered by key.
pub type ValueMap = BTreeMap<String, Value>;

// -----------------------------------------------------------------------------
// Value

/// A dynamically-typed value.
///
/// Signed integers widen to `Int(i64)`, unsigned ones to `Uint(u64)` and
/// floats to `Float(f64)`. `Record` holds an unprojected struct.
///
/// # Examples
///
/// ```
/// use sk_reflect::value::{Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert("name".into(), Value::from("A"));
/// map.insert("age".into(), Value::from(7_u8));
///
/// let value = Value::Map(map);
///
/// assert_eq!(value.get("name").and_then(Value::as_str), Some("A"));
/// assert_eq!(value.get("age").and_then(Value::as_u64), Some(7));
/// assert_eq!(value.to_string(), "{age: 7, name: A}");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    String(String),
    List(Vec<Value>),
    Map(ValueMap),
    Record(RecordValue),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the content of a `Bool`.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the content of an `Int`, or a `Uint` that fits in `i64`.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the content of a `Uint`, or a non-negative `Int`.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(v) => Some(*v),
            Self::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the content of a `Float`.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the content of a `String`.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the items of a `List`.
    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the entries of a `Map`.
    #[inline]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the snapshot of a `Record`.
    #[inline]
    pub const fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Self::Record(v) => Some(v),
            _ => None,
        }
    }

    /// Looks up `key` in a `Map`, or a field in a `Record`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(key),
            Self::Record(record) => record.get(key),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from {
    ($variant:ident($target:ty) <= $($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(<$target>::from(value))
            }
        }
    )+};
}

impl_from!(Int(i64) <= i8, i16, i32, i64);
impl_from!(Uint(u64) <= u8, u16, u32, u64);
impl_from!(Float(f64) <= f32, f64);
impl_from!(Bool(bool) <= bool);
impl_from!(Char(char) <= char);
impl_from!(String(String) <= String, &str);
impl_from!(Map(ValueMap) <= ValueMap);
impl_from!(Record(RecordValue) <= RecordValue);

impl From<isize> for Value {
    #[inline]
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Value {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

impl PartialEq<str> for Value {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

// -----------------------------------------------------------------------------
// Display

/// Renders scalars plainly (strings without quotes), lists as `[a, b]`,
/// maps as `{k: v}` and records as `Ident { field: v }`.
///
/// This is the rendering used for map keys in projections.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Uint(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Record(record) => fmt::Display::fmt(record, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::{Value, ValueMap};
    use crate::value::RecordValue;

    #[test]
    fn integer_widening() {
        assert_eq!(Value::from(-3_i8), Value::Int(-3));
        assert_eq!(Value::from(3_u16), Value::Uint(3));
        assert_eq!(Value::from(3_u16).as_i64(), Some(3));
        assert_eq!(Value::from(-1_i32).as_u64(), None);
        assert_eq!(Value::from(u64::MAX).as_i64(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(vec![1_u8, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::from('x').to_string(), "x");

        let record = RecordValue::new("Point")
            .with_field("x", Value::from(1_i32))
            .with_field("y", Value::from(2_i32));
        assert_eq!(Value::from(record).to_string(), "Point { x: 1, y: 2 }");
    }

    #[test]
    fn lookups() {
        let mut map = ValueMap::new();
        map.insert(String::from("k"), Value::from("v"));
        let value = Value::Map(map);

        assert!(value.get("k").is_some_and(|v| *v == "v"));
        assert!(value.get("missing").is_none());
        assert!(Value::from(1_u8).get("k").is_none());
        assert_eq!(Value::from(None::<u8>), Value::Null);
    }
}
