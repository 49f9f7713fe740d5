use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use sk_reflect::Reflect;
use sk_reflect::info::{NamedField, ReflectKind};
use sk_reflect::ops::Struct;
use sk_reflect::value::Value;

use crate::error::FieldError;
use crate::structs::{as_record, as_record_mut, strip_record, strip_record_mut};
use crate::tags::SKIP_TAG;

// -----------------------------------------------------------------------------
// Field

enum Slot<'a> {
    Shared(&'a dyn Reflect),
    Unique(&'a mut dyn Reflect),
}

/// A view onto one field of one struct instance.
///
/// Handles are created by [`Record`](crate::Record) and
/// [`RecordMut`](crate::RecordMut), or by a parent handle. They borrow the
/// field's storage: a handle obtained through a shared borrow can read but
/// never [`set`](Field::set).
///
/// # Examples
///
/// ```
/// use sk_reflect::derive::Reflect;
/// use sk_structs::{FieldError, RecordMut};
///
/// #[derive(Reflect)]
/// struct Server {
///     pub name: String,
///     pub port: u16,
///     token: String,
/// }
///
/// let mut server = Server {
///     name: String::from("a"),
///     port: 80,
///     token: String::new(),
/// };
/// let mut record = RecordMut::new(&mut server);
///
/// record.field_mut("port").set(8080_u16).unwrap();
/// assert!(matches!(
///     record.field_mut("token").set(String::from("x")),
///     Err(FieldError::NotExported("token")),
/// ));
/// assert!(record.field_mut("name").set(1_u8).is_err());
///
/// assert_eq!(server.port, 8080);
/// ```
pub struct Field<'a> {
    slot: Slot<'a>,
    info: &'static NamedField,
    tag_name: &'a str,
}

impl<'a> Field<'a> {
    #[inline]
    pub(crate) fn shared(value: &'a dyn Reflect, info: &'static NamedField, tag_name: &'a str) -> Self {
        Self {
            slot: Slot::Shared(value),
            info,
            tag_name,
        }
    }

    #[inline]
    pub(crate) fn unique(
        value: &'a mut dyn Reflect,
        info: &'static NamedField,
        tag_name: &'a str,
    ) -> Self {
        Self {
            slot: Slot::Unique(value),
            info,
            tag_name,
        }
    }

    /// Returns the declared field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Returns `true` for `#[reflect(embedded)]` fields.
    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.info.is_embedded()
    }

    /// Returns `true` for `pub` fields.
    #[inline]
    pub fn is_exported(&self) -> bool {
        self.info.is_exported()
    }

    /// Returns `true` if [`set`](Field::set) can reach the storage.
    ///
    /// Exportedness is not considered.
    #[inline]
    pub fn is_settable(&self) -> bool {
        matches!(self.slot, Slot::Unique(_))
    }

    /// Returns the raw tag of namespace `key`.
    #[inline]
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.info.tag(key)
    }

    /// Returns the tag namespace inherited from the creator of this handle.
    #[inline]
    pub fn tag_name(&self) -> &'a str {
        self.tag_name
    }

    /// Returns the static field metadata.
    #[inline]
    pub fn info(&self) -> &'static NamedField {
        self.info
    }

    /// Returns the current value.
    #[inline]
    pub fn value(&self) -> &dyn Reflect {
        match &self.slot {
            Slot::Shared(value) => *value,
            Slot::Unique(value) => &**value,
        }
    }

    /// Returns the runtime kind of the current value.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        self.value().reflect_kind()
    }

    /// Takes a raw snapshot of the current value.
    #[inline]
    pub fn to_value(&self) -> Value {
        self.value().to_value()
    }

    /// Returns `true` if the current value equals the zero value of its type.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value().reflect_is_zero()
    }

    /// Replaces the field value.
    ///
    /// `value` is boxed as is: passing a `Box<dyn Reflect>` here sets a
    /// placeholder field. Use [`set_boxed`](Field::set_boxed) to pass an
    /// already boxed value.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`FieldError::NotExported`]: the field is not `pub`.
    /// - [`FieldError::NotSettable`]: the handle came from a shared borrow.
    /// - [`FieldError::KindMismatch`]: the kinds differ.
    /// - [`FieldError::TypeMismatch`]: same kind, different type.
    #[inline]
    pub fn set<T: Reflect>(&mut self, value: T) -> Result<(), FieldError> {
        self.set_boxed(Box::new(value))
    }

    /// Replaces the field value with a boxed one.
    ///
    /// See [`set`](Field::set) for errors.
    pub fn set_boxed(&mut self, value: Box<dyn Reflect>) -> Result<(), FieldError> {
        let name = self.name();
        if !self.is_exported() {
            return Err(FieldError::NotExported(name));
        }
        let Slot::Unique(target) = &mut self.slot else {
            return Err(FieldError::NotSettable(name));
        };

        let expect = target.reflect_kind();
        let actual = (*value).reflect_kind();
        if expect != actual {
            return Err(FieldError::KindMismatch {
                name,
                expect,
                actual,
            });
        }

        let expect = target.reflect_type_path();
        target
            .set(value)
            .map_err(|rejected| FieldError::TypeMismatch {
                name,
                expect,
                actual: (*rejected).reflect_type_path(),
            })
    }

    /// Sets the field to the zero value of its type.
    ///
    /// Fails like [`set`](Field::set).
    pub fn zero(&mut self) -> Result<(), FieldError> {
        let zero = self.value().reflect_zero();
        self.set_boxed(zero)
    }

    fn record(&self) -> &dyn Struct {
        match as_record(self.value()) {
            Some(record) => record,
            None => panic!("not struct"),
        }
    }

    /// Returns the fields of the nested struct, skipping `-` tagged ones.
    ///
    /// The handles are read-only, see [`fields_mut`](Field::fields_mut).
    ///
    /// # Panics
    ///
    /// If the value is not a struct, directly or through one pointer.
    pub fn fields(&self) -> Vec<Field<'_>> {
        collect_fields(self.record(), self.tag_name)
    }

    /// Returns the fields of the nested struct, settable if this handle is.
    ///
    /// # Panics
    ///
    /// If the value is not a struct, directly or through one pointer.
    pub fn fields_mut(&mut self) -> Vec<Field<'_>> {
        let tag_name = self.tag_name;
        match &mut self.slot {
            Slot::Shared(value) => match as_record(*value) {
                Some(record) => collect_fields(record, tag_name),
                None => panic!("not struct"),
            },
            Slot::Unique(value) => match as_record_mut(&mut **value) {
                Some(record) => collect_fields_mut(record, tag_name),
                None => panic!("not struct"),
            },
        }
    }

    /// Looks up a field of the nested struct, promoted fields included.
    ///
    /// # Panics
    ///
    /// If the value is not a struct after following every pointer.
    pub fn field_by_name(&self, name: &str) -> Option<Field<'_>> {
        match strip_record(self.value()) {
            Some(record) => find_field(record, name, self.tag_name),
            None => panic!("not struct"),
        }
    }

    /// Like [`field_by_name`](Field::field_by_name).
    ///
    /// # Panics
    ///
    /// If the field does not exist.
    pub fn field(&self, name: &str) -> Field<'_> {
        match self.field_by_name(name) {
            Some(field) => field,
            None => panic!("field not found"),
        }
    }

    /// Looks up a field of the nested struct, settable if this handle is.
    ///
    /// # Panics
    ///
    /// If the value is not a struct after following every pointer.
    pub fn field_by_name_mut(&mut self, name: &str) -> Option<Field<'_>> {
        let tag_name = self.tag_name;
        match &mut self.slot {
            Slot::Shared(value) => match strip_record(*value) {
                Some(record) => find_field(record, name, tag_name),
                None => panic!("not struct"),
            },
            Slot::Unique(value) => match strip_record_mut(&mut **value) {
                Some(record) => find_field_mut(record, name, tag_name),
                None => panic!("not struct"),
            },
        }
    }

    /// Like [`field_by_name_mut`](Field::field_by_name_mut).
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

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name())
            .field("value", &self.value())
            .field("settable", &self.is_settable())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Lookup

/// Every field not tagged `-` under `tag_name`, in declaration order.
pub(crate) fn collect_fields<'a>(record: &'a dyn Struct, tag_name: &'a str) -> Vec<Field<'a>> {
    let info = record.struct_info();
    info.fields()
        .iter()
        .zip(record.iter_fields())
        .filter(|(field, _)| field.tag(tag_name) != Some(SKIP_TAG))
        .map(|(field, value)| Field::shared(value, field, tag_name))
        .collect()
}

pub(crate) fn collect_fields_mut<'a>(
    record: &'a mut dyn Struct,
    tag_name: &'a str,
) -> Vec<Field<'a>> {
    let info = record.struct_info();
    info.fields()
        .iter()
        .zip(record.fields_mut())
        .filter(|(field, _)| field.tag(tag_name) != Some(SKIP_TAG))
        .map(|(field, value)| Field::unique(value, field, tag_name))
        .collect()
}

/// Index path to `name`: direct fields first, then the fields promoted from
/// embedded structs, shallowest embedding first. Ties at the same depth go
/// to the earlier declared embedding.
fn field_path(record: &dyn Struct, name: &str) -> Option<(Vec<usize>, &'static NamedField)> {
    let mut queue: VecDeque<(Vec<usize>, &dyn Struct)> = VecDeque::new();
    queue.push_back((Vec::new(), record));

    while let Some((path, current)) = queue.pop_front() {
        let info = current.struct_info();
        if let Some(index) = info.index_of(name) {
            let mut path = path;
            path.push(index);
            return Some((path, info.field_at(index)?));
        }

        for (index, field) in info.fields().iter().enumerate() {
            if !field.is_embedded() {
                continue;
            }
            let Some(embedded) = current.field_at(index).and_then(as_record) else {
                continue;
            };
            let mut next = path.clone();
            next.push(index);
            queue.push_back((next, embedded));
        }
    }
    None
}

pub(crate) fn find_field<'a>(
    record: &'a dyn Struct,
    name: &str,
    tag_name: &'a str,
) -> Option<Field<'a>> {
    let (path, info) = field_path(record, name)?;
    let (&last, parents) = path.split_last()?;

    let mut current = record;
    for &index in parents {
        current = as_record(current.field_at(index)?)?;
    }
    Some(Field::shared(current.field_at(last)?, info, tag_name))
}

pub(crate) fn find_field_mut<'a>(
    record: &'a mut dyn Struct,
    name: &str,
    tag_name: &'a str,
) -> Option<Field<'a>> {
    let (path, info) = field_path(&*record, name)?;
    let (&last, parents) = path.split_last()?;

    let mut current = record;
    for &index in parents {
        current = as_record_mut({ current }.field_at_mut(index)?)?;
    }
    Some(Field::unique(current.field_at_mut(last)?, info, tag_name))
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use sk_reflect::Reflect;
    use sk_reflect::derive::Reflect;
    use sk_reflect::info::ReflectKind;
    use sk_reflect::value::Value;

    use super::Field;
    use crate::error::FieldError;
    use crate::structs::{Record, RecordMut};

    #[derive(Reflect)]
    struct Server {
        #[reflect(tag(json = "host", yaml = "address"))]
        pub name: String,
        pub port: u16,
        token: String,
        pub extra: Box<dyn Reflect>,
    }

    fn server() -> Server {
        Server {
            name: String::from("a"),
            port: 80,
            token: String::from("t"),
            extra: Box::new(1_i32),
        }
    }

    #[derive(Reflect)]
    struct Base {
        pub id: u32,
        pub name: String,
    }

    #[derive(Reflect)]
    struct Meta {
        pub note: String,
    }

    #[derive(Reflect)]
    struct User {
        pub name: String,
        #[reflect(embedded)]
        pub base: Base,
        #[reflect(embedded)]
        pub meta: Box<Meta>,
    }

    #[derive(Reflect)]
    struct Admin {
        #[reflect(embedded)]
        pub user: User,
        pub level: u8,
    }

    fn admin() -> Admin {
        Admin {
            user: User {
                name: String::from("u"),
                base: Base {
                    id: 7,
                    name: String::from("b"),
                },
                meta: Box::new(Meta {
                    note: String::from("n"),
                }),
            },
            level: 2,
        }
    }

    #[test]
    fn accessors() {
        let server = server();
        let record = Record::new(&server);
        let field = record.field("name");

        assert_eq!(field.name(), "name");
        assert_eq!(field.tag("json"), Some("host"));
        assert_eq!(field.tag("yaml"), Some("address"));
        assert_eq!(field.tag("toml"), None);
        assert_eq!(field.kind(), ReflectKind::String);
        assert_eq!(field.to_value(), Value::from("a"));
        assert!(field.is_exported());
        assert!(!field.is_embedded());
        assert!(!field.is_settable());
        assert!(!field.is_zero());

        assert!(!record.field("token").is_exported());
        assert_eq!(record.field("extra").kind(), ReflectKind::Pointer);
        assert!(format!("{field:?}").contains("name"));
    }

    #[test]
    fn set_checks_in_order() {
        let mut server = server();

        {
            let record = Record::new(&server);
            assert_eq!(
                record.field("token").set(String::new()),
                Err(FieldError::NotExported("token")),
            );
            assert_eq!(
                record.field("port").set(1_u16),
                Err(FieldError::NotSettable("port")),
            );
        }

        let mut record = RecordMut::new(&mut server);
        assert_eq!(
            record.field_mut("token").set(1_u8),
            Err(FieldError::NotExported("token")),
        );
        assert_eq!(
            record.field_mut("port").set(String::from("x")),
            Err(FieldError::KindMismatch {
                name: "port",
                expect: ReflectKind::Uint,
                actual: ReflectKind::String,
            }),
        );
        assert_eq!(
            record.field_mut("port").set(1_u32),
            Err(FieldError::TypeMismatch {
                name: "port",
                expect: "u16",
                actual: "u32",
            }),
        );
        assert_eq!(record.field_mut("port").set(443_u16), Ok(()));

        assert_eq!(server.port, 443);
    }

    #[test]
    fn set_placeholder() {
        let mut server = server();
        let mut record = RecordMut::new(&mut server);

        let mut extra = record.field_mut("extra");
        assert!(extra.set(String::from("s")).is_err());

        let value: Box<dyn Reflect> = Box::new(String::from("s"));
        extra.set(value).unwrap();

        assert!((*server.extra).is::<String>());
    }

    #[test]
    fn zero_value() {
        let mut server = server();
        let mut record = RecordMut::new(&mut server);

        record.field_mut("port").zero().unwrap();
        record.field_mut("name").zero().unwrap();
        assert!(record.field_mut("token").zero().is_err());
        assert!(record.as_record().field("port").is_zero());

        assert_eq!(server.port, 0);
        assert!(server.name.is_empty());
        assert_eq!(server.token, "t");
    }

    #[derive(Reflect, PartialEq)]
    #[reflect(default)]
    struct Port {
        pub n: u16,
    }

    impl Default for Port {
        fn default() -> Self {
            Port { n: 80 }
        }
    }

    #[derive(Reflect)]
    struct Listener {
        #[reflect(tag(json = ",omitempty"))]
        pub port: Port,
    }

    #[test]
    fn declared_zero_value() {
        let mut listener = Listener {
            port: Port { n: 443 },
        };
        let mut record = RecordMut::new(&mut listener);
        assert!(!record.as_record().field("port").is_zero());
        assert!(record.as_record().map().contains_key("port"));

        let mut port = record.field_mut("port");
        port.zero().unwrap();
        assert!(port.is_zero());
        assert!(record.as_record().map().is_empty());

        assert_eq!(listener.port.n, 80);
    }

    #[test]
    fn promoted_fields() {
        let admin = admin();
        let record = Record::new(&admin);

        // Direct fields win over promoted ones.
        assert_eq!(record.field("name").to_value(), Value::from("u"));
        assert_eq!(record.field("id").to_value(), Value::Uint(7));
        assert_eq!(record.field("note").to_value(), Value::from("n"));
        assert_eq!(record.field("level").to_value(), Value::Uint(2));
        assert!(record.field("user").is_embedded());
        assert!(record.field_by_name("missing").is_none());

        let user = record.field("user");
        let base = user.field("base");
        assert_eq!(base.field("name").to_value(), Value::from("b"));
    }

    #[derive(Reflect)]
    struct Label {
        pub name: String,
    }

    #[derive(Reflect)]
    struct Wrapper {
        #[reflect(embedded)]
        pub label: Label,
    }

    #[derive(Reflect)]
    struct Outer {
        #[reflect(embedded)]
        pub wrapper: Wrapper,
        #[reflect(embedded)]
        pub label: Label,
    }

    #[test]
    fn shallowest_promoted_field() {
        let mut outer = Outer {
            wrapper: Wrapper {
                label: Label {
                    name: String::from("deep"),
                },
            },
            label: Label {
                name: String::from("shallow"),
            },
        };

        let record = Record::new(&outer);
        assert_eq!(record.field("name").to_value(), Value::from("shallow"));

        let mut record = RecordMut::new(&mut outer);
        record.field_mut("name").set(String::from("set")).unwrap();
        assert_eq!(outer.label.name, "set");
        assert_eq!(outer.wrapper.label.name, "deep");
    }

    #[test]
    fn promoted_fields_mut() {
        let mut admin = admin();
        let mut record = RecordMut::new(&mut admin);

        record.field_mut("id").set(8_u32).unwrap();
        record.field_mut("note").set(String::from("m")).unwrap();

        assert_eq!(admin.user.base.id, 8);
        assert_eq!(admin.user.meta.note, "m");
    }

    #[test]
    fn nested_fields() {
        let mut admin = admin();

        let record = Record::new(&admin);
        let user = record.field("user");
        let names = user.fields().iter().map(Field::name).collect::<Vec<_>>();
        assert_eq!(names, ["name", "base", "meta"]);
        assert_eq!(user.fields()[2].fields()[0].to_value(), Value::from("n"));

        let mut record = RecordMut::new(&mut admin);
        let mut user = record.field_mut("user");
        for mut field in user.fields_mut() {
            assert!(field.is_settable());
            if field.name() == "name" {
                field.set(String::from("v")).unwrap();
            }
        }
        user.field_mut("base").field_mut("id").set(9_u32).unwrap();

        assert_eq!(admin.user.name, "v");
        assert_eq!(admin.user.base.id, 9);
    }

    #[test]
    fn inherits_tag_name() {
        let server = server();
        let record = Record::new(&server).with_tag_name("yaml");
        assert!(record.fields().iter().all(|field| field.tag_name() == "yaml"));
    }

    #[test]
    #[should_panic(expected = "not struct")]
    fn fields_of_scalar() {
        let server = server();
        Record::new(&server).field("port").fields();
    }

    #[test]
    #[should_panic(expected = "field not found")]
    fn missing_nested_field() {
        let admin = admin();
        Record::new(&admin).field("user").field("missing");
    }
}
