use alloc::vec::Vec;
use core::fmt;

use sk_reflect::Reflect;
use sk_reflect::ops::{ReflectMut, ReflectRef, Struct};
use sk_reflect::value::{Value, ValueMap};

use crate::DEFAULT_TAG_NAME;
use crate::error::{NotStructError, ProjectError};
use crate::field::{Field, collect_fields, collect_fields_mut, find_field, find_field_mut};
use crate::nested::Projector;
use crate::tags::SKIP_TAG;

// -----------------------------------------------------------------------------
// Shape helpers

/// The struct behind `value`, through at most one pointer.
pub(crate) fn as_record(value: &dyn Reflect) -> Option<&dyn Struct> {
    match value.reflect_ref() {
        ReflectRef::Struct(record) => Some(record),
        ReflectRef::Pointer(pointer) => pointer.pointee()?.reflect_ref().as_struct(),
        _ => None,
    }
}

pub(crate) fn as_record_mut(value: &mut dyn Reflect) -> Option<&mut dyn Struct> {
    match value.reflect_mut() {
        ReflectMut::Struct(record) => Some(record),
        ReflectMut::Pointer(pointer) => pointer.pointee_mut()?.reflect_mut().as_struct(),
        _ => None,
    }
}

/// The struct behind `value`, through any number of pointers.
pub(crate) fn strip_record(mut value: &dyn Reflect) -> Option<&dyn Struct> {
    loop {
        match value.reflect_ref() {
            ReflectRef::Struct(record) => return Some(record),
            ReflectRef::Pointer(pointer) => value = pointer.pointee()?,
            _ => return None,
        }
    }
}

pub(crate) fn strip_record_mut(mut value: &mut dyn Reflect) -> Option<&mut dyn Struct> {
    loop {
        match { value }.reflect_mut() {
            ReflectMut::Struct(record) => return Some(record),
            ReflectMut::Pointer(pointer) => value = pointer.pointee_mut()?,
            _ => return None,
        }
    }
}

// -----------------------------------------------------------------------------
// Record

/// Read access to one struct instance.
///
/// Every projection reads the tags of the active namespace,
/// [`DEFAULT_TAG_NAME`] unless changed. Only exported fields take part in
/// [`map`](Record::map), [`values`](Record::values) and the zero checks,
/// while [`fields`](Record::fields) and [`names`](Record::names) list
/// private fields too. A field tagged `-` is invisible to all of them.
///
/// # Examples
///
/// ```
/// use sk_reflect::derive::Reflect;
/// use sk_reflect::value::Value;
/// use sk_structs::Record;
///
/// #[derive(Reflect)]
/// struct Person {
///     pub name: String,
///     #[reflect(tag(json = "age,omitempty"))]
///     pub age: u32,
///     #[reflect(tag(json = "-"))]
///     pub secret: String,
/// }
///
/// let person = Person {
///     name: String::from("A"),
///     age: 0,
///     secret: String::from("x"),
/// };
/// let record = Record::new(&person);
///
/// assert_eq!(record.names(), ["name", "age"]);
///
/// let map = record.map();
/// assert_eq!(map.len(), 1);
/// assert_eq!(map["name"], Value::from("A"));
/// ```
#[derive(Clone, Copy)]
pub struct Record<'a> {
    value: &'a dyn Struct,
    tag_name: &'a str,
    strict: bool,
}

impl<'a> Record<'a> {
    /// Wraps the struct behind `value`, following every pointer.
    ///
    /// # Panics
    ///
    /// If `value` is not a struct, or a null pointer is met on the way.
    #[inline]
    pub fn new(value: &'a dyn Reflect) -> Self {
        match Self::try_new(value) {
            Ok(record) => record,
            Err(_) => panic!("not struct"),
        }
    }

    /// Non-panicking [`new`](Record::new).
    pub fn try_new(value: &'a dyn Reflect) -> Result<Self, NotStructError> {
        strip_record(value)
            .map(Self::from_struct)
            .ok_or_else(|| NotStructError(value.reflect_type_path()))
    }

    /// Wraps a struct view directly.
    #[inline]
    pub fn from_struct(value: &'a dyn Struct) -> Self {
        Self {
            value,
            tag_name: DEFAULT_TAG_NAME,
            strict: false,
        }
    }

    /// Returns the active tag namespace.
    #[inline]
    pub fn tag_name(&self) -> &'a str {
        self.tag_name
    }

    /// Changes the active tag namespace.
    #[inline]
    pub fn set_tag_name(&mut self, tag_name: &'a str) {
        self.tag_name = tag_name;
    }

    /// Builder form of [`set_tag_name`](Record::set_tag_name).
    #[inline]
    pub fn with_tag_name(mut self, tag_name: &'a str) -> Self {
        self.tag_name = tag_name;
        self
    }

    /// With `strict`, a `string` field whose value has no string conversion
    /// fails [`try_map`](Record::try_map) and [`try_values`](Record::try_values)
    /// with [`ProjectError::UnsupportedConversion`]. It is skipped otherwise.
    #[inline]
    pub fn with_strict_conversion(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the wrapped struct.
    #[inline]
    pub fn value(&self) -> &'a dyn Struct {
        self.value
    }

    /// Returns the declared type name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.value.struct_info().ident()
    }

    /// Returns read-only handles of every field not tagged `-`, private
    /// and embedded ones included, in declaration order.
    #[inline]
    pub fn fields(&self) -> Vec<Field<'a>> {
        collect_fields(self.value, self.tag_name)
    }

    /// Returns the names of [`fields`](Record::fields).
    pub fn names(&self) -> Vec<&'static str> {
        self.value
            .struct_info()
            .fields()
            .iter()
            .filter(|field| field.tag(self.tag_name) != Some(SKIP_TAG))
            .map(|field| field.name())
            .collect()
    }

    /// Looks up a field by declared name.
    ///
    /// Direct fields win, then fields promoted from embedded structs, the
    /// shallowest embedding first. Tags are not considered.
    #[inline]
    pub fn field_by_name(&self, name: &str) -> Option<Field<'a>> {
        find_field(self.value, name, self.tag_name)
    }

    /// Like [`field_by_name`](Record::field_by_name).
    ///
    /// # Panics
    ///
    /// If the field does not exist.
    pub fn field(&self, name: &str) -> Field<'a> {
        match self.field_by_name(name) {
            Some(field) => field,
            None => panic!("field not found"),
        }
    }

    #[inline]
    fn projector(&self) -> Projector<'a> {
        Projector::new(self.tag_name, self.strict)
    }

    /// Projects the struct into a map.
    ///
    /// # Panics
    ///
    /// If the projection fails, see [`try_map`](Record::try_map).
    pub fn map(&self) -> ValueMap {
        match self.try_map() {
            Ok(map) => map,
            Err(err) => panic!("{err}"),
        }
    }

    /// Projects the struct into a map.
    ///
    /// For each exported field, in declaration order:
    /// 1. The key is the tag name, or the declared name when empty.
    /// 2. `omitempty` skips a zero value.
    /// 3. `string` emits the value's string conversion and stops here.
    /// 4. `omitnested` keeps the raw value, otherwise nested structs, lists
    ///    of structs and maps of structs are projected.
    /// 5. `flatten` merges a projected map into the output instead of
    ///    nesting it under the key.
    ///
    /// # Errors
    ///
    /// [`ProjectError::CyclicStructure`] when a struct is reachable from
    /// itself, [`ProjectError::UnsupportedConversion`] in strict mode.
    pub fn try_map(&self) -> Result<ValueMap, ProjectError> {
        let mut map = ValueMap::new();
        self.projector().fill_map(self.value, &mut map)?;
        Ok(map)
    }

    /// Projects into an existing map. No-op for `None`.
    ///
    /// # Panics
    ///
    /// If the projection fails, see [`try_map`](Record::try_map).
    pub fn fill_map(&self, out: Option<&mut ValueMap>) {
        if let Some(out) = out
            && let Err(err) = self.try_fill_map(out)
        {
            panic!("{err}");
        }
    }

    /// Projects into an existing map.
    ///
    /// `out` is left untouched on failure.
    pub fn try_fill_map(&self, out: &mut ValueMap) -> Result<(), ProjectError> {
        let map = self.try_map()?;
        out.extend(map);
        Ok(())
    }

    /// Flattens the exported field values into a list.
    ///
    /// # Panics
    ///
    /// If the projection fails, see [`try_values`](Record::try_values).
    pub fn values(&self) -> Vec<Value> {
        match self.try_values() {
            Ok(values) => values,
            Err(err) => panic!("{err}"),
        }
    }

    /// Flattens the exported field values into a list.
    ///
    /// `omitempty` and `string` act like in [`try_map`](Record::try_map).
    /// Nested structs splice their own values in place, unless `omitnested`.
    pub fn try_values(&self) -> Result<Vec<Value>, ProjectError> {
        let mut values = Vec::new();
        self.projector().values(self.value, &mut values)?;
        Ok(values)
    }

    /// Returns `true` if every exported field is zero.
    ///
    /// Nested structs are checked with their own `is_zero`, unless `omitnested`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.projector().is_zero(self.value)
    }

    /// Returns `true` if any exported field is zero.
    ///
    /// Nested structs are checked with their own `has_zero`, unless `omitnested`.
    #[inline]
    pub fn has_zero(&self) -> bool {
        self.projector().has_zero(self.value)
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("name", &self.name())
            .field("tag_name", &self.tag_name)
            .field("strict", &self.strict)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// RecordMut

/// Write access to one struct instance.
///
/// Field handles it hands out are settable. Use
/// [`as_record`](RecordMut::as_record) for projections.
pub struct RecordMut<'a> {
    value: &'a mut dyn Struct,
    tag_name: &'a str,
    strict: bool,
}

impl<'a> RecordMut<'a> {
    /// Wraps the struct behind `value`, following every pointer.
    ///
    /// # Panics
    ///
    /// If `value` is not a struct, or a null or shared pointer is met on the way.
    #[inline]
    pub fn new(value: &'a mut dyn Reflect) -> Self {
        match Self::try_new(value) {
            Ok(record) => record,
            Err(_) => panic!("not struct"),
        }
    }

    /// Non-panicking [`new`](RecordMut::new).
    pub fn try_new(value: &'a mut dyn Reflect) -> Result<Self, NotStructError> {
        let type_path = value.reflect_type_path();
        match strip_record_mut(value) {
            Some(value) => Ok(Self::from_struct(value)),
            None => Err(NotStructError(type_path)),
        }
    }

    /// Wraps a struct view directly.
    #[inline]
    pub fn from_struct(value: &'a mut dyn Struct) -> Self {
        Self {
            value,
            tag_name: DEFAULT_TAG_NAME,
            strict: false,
        }
    }

    /// Returns the active tag namespace.
    #[inline]
    pub fn tag_name(&self) -> &'a str {
        self.tag_name
    }

    /// Changes the active tag namespace.
    #[inline]
    pub fn set_tag_name(&mut self, tag_name: &'a str) {
        self.tag_name = tag_name;
    }

    /// Builder form of [`set_tag_name`](RecordMut::set_tag_name).
    #[inline]
    pub fn with_tag_name(mut self, tag_name: &'a str) -> Self {
        self.tag_name = tag_name;
        self
    }

    /// See [`Record::with_strict_conversion`].
    #[inline]
    pub fn with_strict_conversion(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Borrows as a read-only [`Record`] with the same settings.
    #[inline]
    pub fn as_record(&self) -> Record<'_> {
        Record {
            value: &*self.value,
            tag_name: self.tag_name,
            strict: self.strict,
        }
    }

    /// Returns settable handles of every field not tagged `-`.
    #[inline]
    pub fn fields_mut(&mut self) -> Vec<Field<'_>> {
        collect_fields_mut(&mut *self.value, self.tag_name)
    }

    /// Settable form of [`Record::field_by_name`].
    #[inline]
    pub fn field_by_name_mut(&mut self, name: &str) -> Option<Field<'_>> {
        find_field_mut(&mut *self.value, name, self.tag_name)
    }

    /// Like [`field_by_name_mut`](RecordMut::field_by_name_mut).
    ///
    /// # Panics
    ///
    /// If the field does not exist.
    pub fn field_mut(&mut self, name: &str) -> Field<'_> {
        match self.field_by_name_mut(name) {
            Some(field) => field,
            None => panic!("field not found"),
        }
    }
}

impl fmt::Debug for RecordMut<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_record(), f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::fmt;

    use sk_reflect::derive::Reflect;
    use sk_reflect::value::{Value, ValueMap};

    use super::{Record, RecordMut};
    use crate::error::{NotStructError, ProjectError};

    #[derive(Reflect)]
    struct Person {
        pub name: String,
        #[reflect(tag(json = "age,omitempty"))]
        pub age: u32,
        #[reflect(tag(json = "-"))]
        pub secret: String,
        note: String,
    }

    fn person(age: u32) -> Person {
        Person {
            name: String::from("A"),
            age,
            secret: String::from("x"),
            note: String::new(),
        }
    }

    #[derive(Reflect)]
    struct Inner {
        pub x: i64,
    }

    #[derive(Reflect)]
    struct Outer {
        #[reflect(tag(json = "title", yaml = "heading"))]
        pub name: String,
        #[reflect(tag(json = ",flatten"))]
        pub inner: Inner,
    }

    #[derive(Reflect)]
    struct Label {
        pub text: String,
        #[reflect(tag(json = ",omitnested"))]
        pub raw: Inner,
    }

    #[derive(Reflect)]
    #[reflect(display)]
    struct Celsius {
        pub degrees: i32,
    }

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}C", self.degrees)
        }
    }

    #[derive(Reflect)]
    struct Reading {
        #[reflect(tag(json = "temp,string"))]
        pub temp: Celsius,
        #[reflect(tag(json = ",string"))]
        pub count: u8,
        #[reflect(tag(json = ",string"))]
        pub samples: Vec<u8>,
    }

    #[test]
    fn map_skips_hidden_and_empty() {
        let map = Record::new(&person(0)).map();
        assert_eq!(map.len(), 1);
        assert_eq!(map["name"], Value::from("A"));

        let map = Record::new(&person(30)).map();
        assert_eq!(map["age"], Value::Uint(30));
        assert!(!map.contains_key("secret"));
        assert!(!map.contains_key("note"));
    }

    #[test]
    fn map_flattens_nested() {
        let outer = Outer {
            name: String::from("A"),
            inner: Inner { x: 5 },
        };
        let map = Record::new(&outer).map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["title"], Value::from("A"));
        assert_eq!(map["x"], Value::Int(5));
    }

    #[derive(Reflect)]
    struct Shadowed {
        pub x: i64,
        #[reflect(tag(json = ",flatten"))]
        pub inner: Inner,
    }

    #[derive(Reflect)]
    struct Shadowing {
        #[reflect(tag(json = ",flatten"))]
        pub inner: Inner,
        pub x: i64,
    }

    #[test]
    fn flatten_collisions_follow_declaration_order() {
        let shadowed = Shadowed {
            x: 1,
            inner: Inner { x: 5 },
        };
        let expect = ValueMap::from([(String::from("x"), Value::Int(5))]);
        assert_eq!(Record::new(&shadowed).map(), expect);

        let shadowing = Shadowing {
            inner: Inner { x: 5 },
            x: 1,
        };
        let expect = ValueMap::from([(String::from("x"), Value::Int(1))]);
        assert_eq!(Record::new(&shadowing).map(), expect);
    }

    #[derive(Reflect)]
    struct Item {
        pub id: u32,
    }

    #[derive(Reflect)]
    struct Catalog {
        pub name: String,
        #[reflect(tag(json = ",flatten"))]
        pub items: BTreeMap<String, Item>,
    }

    #[test]
    fn flatten_map_of_records() {
        let catalog = Catalog {
            name: String::from("c"),
            items: BTreeMap::from([
                (String::from("a"), Item { id: 1 }),
                (String::from("b"), Item { id: 2 }),
            ]),
        };
        let item = |id: u32| Value::Map(ValueMap::from([(String::from("id"), Value::Uint(id.into()))]));
        let expect = ValueMap::from([
            (String::from("name"), Value::from("c")),
            (String::from("a"), item(1)),
            (String::from("b"), item(2)),
        ]);
        assert_eq!(Record::new(&catalog).map(), expect);
    }

    #[test]
    fn map_keeps_omitnested_raw() {
        let label = Label {
            text: String::from("t"),
            raw: Inner { x: 2 },
        };
        let map = Record::new(&label).map();
        let raw = map["raw"].as_record().unwrap();
        assert_eq!(raw.type_ident(), "Inner");
        assert_eq!(raw.get("x"), Some(&Value::Int(2)));
    }

    #[test]
    fn other_tag_namespace() {
        let outer = Outer {
            name: String::from("A"),
            inner: Inner { x: 5 },
        };
        let record = Record::new(&outer).with_tag_name("yaml");
        assert_eq!(record.tag_name(), "yaml");

        let map = record.map();
        assert_eq!(map["heading"], Value::from("A"));
        assert_eq!(map["inner"].get("x"), Some(&Value::Int(5)));

        let mut record = record;
        record.set_tag_name("toml");
        assert!(record.map().contains_key("name"));
    }

    #[test]
    fn string_option() {
        let reading = Reading {
            temp: Celsius { degrees: 21 },
            count: 3,
            samples: vec![1, 2],
        };
        let record = Record::new(&reading);

        // Only `Celsius` opts into a string conversion.
        let map = record.map();
        assert_eq!(map.len(), 1);
        assert_eq!(map["temp"], Value::from("21C"));

        let values = record.values();
        assert_eq!(values, [Value::from("21C")]);

        let strict = record.with_strict_conversion(true);
        assert_eq!(strict.try_map(), Err(ProjectError::UnsupportedConversion("count")));
        assert!(strict.try_values().is_err());
    }

    #[test]
    fn fill_existing_map() {
        let mut out = ValueMap::new();
        out.insert(String::from("name"), Value::Null);
        out.insert(String::from("kept"), Value::Bool(true));

        let person = person(0);
        let record = Record::new(&person);
        record.fill_map(None);
        record.fill_map(Some(&mut out));

        assert_eq!(out.len(), 2);
        assert_eq!(out["name"], Value::from("A"));
        assert_eq!(out["kept"], Value::Bool(true));
    }

    #[test]
    fn values_splice_nested() {
        let outer = Outer {
            name: String::from("A"),
            inner: Inner { x: 5 },
        };
        let values = Record::new(&outer).values();
        assert_eq!(values, [Value::from("A"), Value::Int(5)]);

        let label = Label {
            text: String::from("t"),
            raw: Inner { x: 2 },
        };
        let values = Record::new(&label).values();
        assert_eq!(values.len(), 2);
        assert!(values[1].as_record().is_some());

        assert_eq!(Record::new(&person(0)).values(), [Value::from("A")]);
    }

    #[test]
    fn zero_checks() {
        let outer = Outer {
            name: String::new(),
            inner: Inner { x: 0 },
        };
        assert!(Record::new(&outer).is_zero());
        assert!(Record::new(&outer).has_zero());

        let outer = Outer {
            name: String::from("A"),
            inner: Inner { x: 0 },
        };
        assert!(!Record::new(&outer).is_zero());
        assert!(Record::new(&outer).has_zero());

        let outer = Outer {
            name: String::from("A"),
            inner: Inner { x: 1 },
        };
        assert!(!Record::new(&outer).has_zero());

        // Hidden and private fields are ignored.
        let mut hidden = person(1);
        hidden.secret = String::new();
        assert!(!Record::new(&hidden).has_zero());
    }

    #[test]
    fn names_and_fields() {
        let person = person(0);
        let record = Record::new(&person);

        assert_eq!(record.name(), "Person");
        assert_eq!(record.names(), ["name", "age", "note"]);

        let fields = record.fields();
        assert_eq!(fields.len(), 3);
        assert!(!fields[2].is_exported());
        assert_eq!(fields[0].tag_name(), "json");

        assert!(record.field_by_name("secret").is_some());
        assert!(record.field_by_name("missing").is_none());
        assert_eq!(record.field("age").to_value(), Value::Uint(0));
    }

    #[test]
    #[should_panic(expected = "field not found")]
    fn missing_field_panics() {
        let person = person(0);
        Record::new(&person).field("missing");
    }

    #[test]
    fn through_pointers() {
        let boxed = Box::new(Some(Inner { x: 3 }));
        let record = Record::new(&boxed);
        assert_eq!(record.name(), "Inner");
        assert_eq!(record.map()["x"], Value::Int(3));

        let none: Option<Inner> = None;
        assert!(Record::try_new(&none).is_err());
        assert_eq!(Record::try_new(&7_u8).unwrap_err(), NotStructError("u8"));
    }

    #[test]
    #[should_panic(expected = "not struct")]
    fn new_rejects_scalars() {
        Record::new(&String::from("s"));
    }

    #[test]
    fn record_mut() {
        let mut outer = Outer {
            name: String::from("A"),
            inner: Inner { x: 5 },
        };
        let mut record = RecordMut::new(&mut outer);

        record.field_mut("inner").field_mut("x").set(9_i64).unwrap();
        for mut field in record.fields_mut() {
            if field.name() == "name" {
                field.set(String::from("B")).unwrap();
            }
        }
        assert_eq!(record.as_record().map()["x"], Value::Int(9));
        assert!(record.field_by_name_mut("missing").is_none());

        assert_eq!(outer.name, "B");
        assert_eq!(outer.inner.x, 9);
    }
}
