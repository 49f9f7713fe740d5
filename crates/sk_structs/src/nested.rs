//! The recursive projection of field values.
//!
//! Whether a value is expanded depends on its runtime shape after removing
//! one pointer, but whether a collection is expanded depends on its static
//! item type: a `Vec<Inner>` is projected item by item while a
//! `Vec<Box<dyn Reflect>>` is kept raw, whatever it holds. A
//! `Box<dyn Reflect>` holding a struct is expanded, one holding a collection
//! is not.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::any::TypeId;
use core::ptr;

use sk_reflect::Reflect;
use sk_reflect::info::{NamedField, TypeInfo};
use sk_reflect::ops::{ReflectRef, Struct};
use sk_reflect::value::{Value, ValueMap};
use sk_utils::hash::HashSet;

use crate::error::ProjectError;
use crate::structs::as_record;
use crate::tags::{self, SKIP_TAG, TagOptions};

/// Address and type of a struct on the current path.
type Identity = (usize, TypeId);

// -----------------------------------------------------------------------------
// Projected

/// Result of projecting one value.
enum Projected {
    /// A struct, list or map that was walked.
    Expanded(Value),
    /// The raw value.
    Raw(Value),
}

impl Projected {
    #[inline]
    fn into_value(self) -> Value {
        match self {
            Self::Expanded(value) | Self::Raw(value) => value,
        }
    }
}

// -----------------------------------------------------------------------------
// Projector

/// Walks structs with one tag namespace, tracking the structs currently
/// being visited.
pub(crate) struct Projector<'t> {
    tag_name: &'t str,
    strict: bool,
    ancestors: HashSet<Identity>,
}

impl<'t> Projector<'t> {
    #[inline]
    pub fn new(tag_name: &'t str, strict: bool) -> Self {
        Self {
            tag_name,
            strict,
            ancestors: HashSet::default(),
        }
    }

    fn enter(&mut self, record: &dyn Struct) -> Result<Identity, ProjectError> {
        self.try_enter(record).ok_or_else(|| {
            let type_path = record.reflect_type_path();
            log::warn!("cyclic structure: `{type_path}` is reachable from itself");
            ProjectError::CyclicStructure(type_path)
        })
    }

    /// Like `enter`, without reporting. Zero checks treat a revisit as undecided.
    fn try_enter(&mut self, record: &dyn Struct) -> Option<Identity> {
        let identity = (ptr::from_ref(record).cast::<()>().addr(), record.ty_id());
        self.ancestors.insert(identity).then_some(identity)
    }

    fn leave(&mut self, identity: Identity) {
        self.ancestors.remove(&identity);
    }

    /// Exported fields not tagged `-`, with their parsed options.
    fn struct_fields<'a>(
        &self,
        record: &'a dyn Struct,
    ) -> impl Iterator<Item = (&'static NamedField, &'a dyn Reflect)> + use<'a, 't> {
        let tag_name = self.tag_name;
        record
            .struct_info()
            .fields()
            .iter()
            .zip(record.iter_fields())
            .filter(move |(field, _)| field.is_exported() && field.tag(tag_name) != Some(SKIP_TAG))
    }

    #[inline]
    fn parse_tag(&self, field: &'static NamedField) -> (&'static str, TagOptions<'static>) {
        tags::parse_tag(field.tag(self.tag_name).unwrap_or_default())
    }

    /// The string conversion of a `string` field, `None` when skipped.
    fn stringify(
        &self,
        field: &'static NamedField,
        value: &dyn Reflect,
    ) -> Result<Option<String>, ProjectError> {
        match value.reflect_display() {
            Some(display) => Ok(Some(display.to_string())),
            None if self.strict => Err(ProjectError::UnsupportedConversion(field.name())),
            None => {
                log::debug!(
                    "field `{}` of type `{}` has no string conversion, skipped",
                    field.name(),
                    value.reflect_type_path(),
                );
                Ok(None)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Map

    pub fn fill_map(&mut self, record: &dyn Struct, out: &mut ValueMap) -> Result<(), ProjectError> {
        let identity = self.enter(record)?;
        let result = self.fill_fields(record, out);
        self.leave(identity);
        result
    }

    fn fill_fields(&mut self, record: &dyn Struct, out: &mut ValueMap) -> Result<(), ProjectError> {
        for (field, value) in self.struct_fields(record) {
            let (tag, options) = self.parse_tag(field);
            let key = if tag.is_empty() { field.name() } else { tag };

            if options.has(tags::OMIT_EMPTY) && value.reflect_is_zero() {
                continue;
            }

            if options.has(tags::STRING) {
                if let Some(text) = self.stringify(field, value)? {
                    out.insert(key.into(), Value::String(text));
                }
                continue;
            }

            if options.has(tags::OMIT_NESTED) {
                out.insert(key.into(), value.to_value());
                continue;
            }

            match self.project(value)? {
                Projected::Expanded(Value::Map(map)) if options.has(tags::FLATTEN) => out.extend(map),
                projected => {
                    out.insert(key.into(), projected.into_value());
                }
            }
        }
        Ok(())
    }

    fn project(&mut self, value: &dyn Reflect) -> Result<Projected, ProjectError> {
        let (target, placeholder) = match value.reflect_ref() {
            ReflectRef::Pointer(pointer) => match pointer.pointee() {
                Some(pointee) => (pointee, is_placeholder(value.reflect_type_info())),
                None => return Ok(Projected::Raw(Value::Null)),
            },
            _ => (value, false),
        };

        match target.reflect_ref() {
            ReflectRef::Struct(record) => {
                log::trace!("projecting nested `{}`", record.reflect_type_path());
                let mut map = ValueMap::new();
                self.fill_map(record, &mut map)?;
                if map.is_empty() {
                    Ok(Projected::Raw(value.to_value()))
                } else {
                    Ok(Projected::Expanded(Value::Map(map)))
                }
            }
            ReflectRef::Map(map) if !placeholder && expands_map(target.reflect_type_info()) => {
                let mut out = ValueMap::new();
                for (key, item) in map.iter() {
                    out.insert(key.to_value().to_string(), self.project(item)?.into_value());
                }
                Ok(Projected::Expanded(Value::Map(out)))
            }
            ReflectRef::List(list) | ReflectRef::Array(list)
                if !placeholder && expands_list(target.reflect_type_info()) =>
            {
                let items = list
                    .iter()
                    .map(|item| self.project(item).map(Projected::into_value))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Projected::Expanded(Value::List(items)))
            }
            _ => Ok(Projected::Raw(value.to_value())),
        }
    }

    // -------------------------------------------------------------------------
    // Values

    pub fn values(&mut self, record: &dyn Struct, out: &mut Vec<Value>) -> Result<(), ProjectError> {
        let identity = self.enter(record)?;
        let result = self.collect_values(record, out);
        self.leave(identity);
        result
    }

    fn collect_values(&mut self, record: &dyn Struct, out: &mut Vec<Value>) -> Result<(), ProjectError> {
        for (field, value) in self.struct_fields(record) {
            let (_, options) = self.parse_tag(field);

            if options.has(tags::OMIT_EMPTY) && value.reflect_is_zero() {
                continue;
            }

            if options.has(tags::STRING) {
                if let Some(text) = self.stringify(field, value)? {
                    out.push(Value::String(text));
                }
                continue;
            }

            match as_record(value) {
                Some(nested) if !options.has(tags::OMIT_NESTED) => self.values(nested, out)?,
                _ => out.push(value.to_value()),
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Zero

    /// `None` when `record` is already being visited.
    fn check_fields(&mut self, record: &dyn Struct, any_zero: bool) -> Option<bool> {
        let identity = self.try_enter(record)?;

        let mut found = false;
        for (field, value) in self.struct_fields(record) {
            let (_, options) = self.parse_tag(field);

            let zero = match as_record(value) {
                Some(nested) if !options.has(tags::OMIT_NESTED) => {
                    match self.check_fields(nested, any_zero) {
                        // A struct on the current path decides nothing.
                        None => continue,
                        Some(zero) => zero,
                    }
                }
                _ => value.reflect_is_zero(),
            };

            if zero == any_zero {
                found = true;
                break;
            }
        }

        self.leave(identity);
        Some(if any_zero { found } else { !found })
    }

    /// Every exported field is zero, nested structs by their own rule.
    pub fn is_zero(&mut self, record: &dyn Struct) -> bool {
        self.check_fields(record, false).unwrap_or(true)
    }

    /// Any exported field is zero, nested structs by their own rule.
    pub fn has_zero(&mut self, record: &dyn Struct) -> bool {
        self.check_fields(record, true).unwrap_or(false)
    }
}

// -----------------------------------------------------------------------------
// Static classification

/// `Box<dyn Reflect>` and the like: the static pointee is unknown.
#[inline]
fn is_placeholder(info: TypeInfo) -> bool {
    info.as_pointer().is_some_and(|pointer| pointer.pointee().is_opaque())
}

/// Lists whose item type is a struct, through one pointer.
#[inline]
fn expands_list(info: TypeInfo) -> bool {
    info.list_item().is_some_and(|item| item.strip_pointer().is_struct())
}

/// Maps whose value type is a struct through one pointer, or a list of structs.
#[inline]
fn expands_map(info: TypeInfo) -> bool {
    let Some(map) = info.as_map() else {
        return false;
    };
    let value = map.value().strip_pointer();
    value.is_struct() || value.list_item().is_some_and(|item| item.is_struct())
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use sk_reflect::Reflect;
    use sk_reflect::derive::Reflect;
    use sk_reflect::info::{PointerInfo, ReflectKind, Type, TypeInfo, Typed};
    use sk_reflect::ops::{Pointer, ReflectMut, ReflectRef};
    use sk_reflect::value::Value;

    use super::Projector;
    use crate::error::ProjectError;
    use crate::structs::Record;

    #[derive(Reflect)]
    struct Item {
        pub id: u32,
    }

    fn item(id: u32) -> Item {
        Item { id }
    }

    #[derive(Reflect)]
    struct Hidden {
        secret: u8,
    }

    #[derive(Reflect)]
    struct Empty {}

    #[derive(Reflect)]
    struct Shelf {
        pub items: Vec<Item>,
        pub boxed: Vec<Box<Item>>,
        pub numbers: [u8; 2],
        pub any: Vec<Box<dyn Reflect>>,
        pub by_name: BTreeMap<String, Item>,
        pub groups: BTreeMap<u8, Vec<Item>>,
        pub counts: BTreeMap<String, u32>,
    }

    #[test]
    fn collections_of_structs() {
        let shelf = Shelf {
            items: vec![item(1), item(2)],
            boxed: vec![Box::new(item(3))],
            numbers: [4, 5],
            any: vec![Box::new(item(6))],
            by_name: BTreeMap::from([(String::from("a"), item(7))]),
            groups: BTreeMap::from([(9, vec![item(8)])]),
            counts: BTreeMap::from([(String::from("c"), 10)]),
        };
        let map = Record::new(&shelf).map();

        let items = map["items"].as_list().unwrap();
        assert_eq!(items[1].get("id"), Some(&Value::Uint(2)));
        assert!(items[0].as_map().is_some());

        let boxed = map["boxed"].as_list().unwrap();
        assert_eq!(boxed[0].get("id"), Some(&Value::Uint(3)));

        assert_eq!(map["numbers"], Value::List(vec![Value::Uint(4), Value::Uint(5)]));

        // Placeholder items are never walked.
        let any = map["any"].as_list().unwrap();
        assert_eq!(any[0].as_record().map(|record| record.type_ident()), Some("Item"));

        assert_eq!(map["by_name"].get("a").and_then(|v| v.get("id")), Some(&Value::Uint(7)));

        let group = map["groups"].get("9").and_then(Value::as_list).unwrap();
        assert!(group[0].as_map().is_some());

        assert_eq!(map["counts"].get("c"), Some(&Value::Uint(10)));
    }

    #[derive(Reflect)]
    struct Slots {
        pub single: Box<dyn Reflect>,
        pub list: Box<dyn Reflect>,
        pub optional: Option<Item>,
        pub missing: Option<Item>,
        pub hidden: Hidden,
        pub empty: Empty,
    }

    #[test]
    fn pointers_and_raw_structs() {
        let slots = Slots {
            single: Box::new(item(1)),
            list: Box::new(vec![item(2)]),
            optional: Some(item(3)),
            missing: None,
            hidden: Hidden { secret: 4 },
            empty: Empty {},
        };
        let map = Record::new(&slots).map();

        assert_eq!(map["single"].get("id"), Some(&Value::Uint(1)));

        let list = map["list"].as_list().unwrap();
        assert!(list[0].as_record().is_some());

        assert_eq!(map["optional"].get("id"), Some(&Value::Uint(3)));
        assert_eq!(map["missing"], Value::Null);

        let hidden = map["hidden"].as_record().unwrap();
        assert_eq!(hidden.get("secret"), Some(&Value::Uint(4)));
        assert_eq!(map["empty"].as_record().map(|record| record.len()), Some(0));
    }

    // A pointer to a `Node` held by a static, so that a node can point to itself.
    struct Link(Option<&'static Node>);

    impl Typed for Link {
        fn type_info() -> TypeInfo {
            TypeInfo::Pointer(PointerInfo::new(Type::of::<Self>(), Node::type_info))
        }
    }

    impl Reflect for Link {
        fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        fn reflect_kind(&self) -> ReflectKind {
            ReflectKind::Pointer
        }

        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Pointer(self)
        }

        fn reflect_mut(&mut self) -> ReflectMut<'_> {
            ReflectMut::Pointer(self)
        }

        fn reflect_zero(&self) -> Box<dyn Reflect> {
            Box::new(Link(None))
        }
    }

    impl Pointer for Link {
        fn pointee(&self) -> Option<&dyn Reflect> {
            self.0.map(|node| node as &dyn Reflect)
        }

        fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
            None
        }
    }

    #[derive(Reflect)]
    struct Node {
        pub id: u8,
        pub next: Link,
    }

    static LOOP: Node = Node {
        id: 1,
        next: Link(Some(&LOOP)),
    };

    static ZERO_LOOP: Node = Node {
        id: 0,
        next: Link(Some(&ZERO_LOOP)),
    };

    static TAIL: Node = Node {
        id: 2,
        next: Link(None),
    };

    static HEAD: Node = Node {
        id: 1,
        next: Link(Some(&TAIL)),
    };

    #[test]
    fn cycles_fail() {
        let record = Record::new(&LOOP);
        assert_eq!(record.try_map(), Err(ProjectError::CyclicStructure(LOOP.reflect_type_path())));
        assert!(record.try_values().is_err());

        assert!(!record.is_zero());
        assert!(!record.has_zero());
        assert!(Record::new(&ZERO_LOOP).is_zero());
        assert!(Record::new(&ZERO_LOOP).has_zero());
    }

    #[test]
    fn zero_checks_on_cycles_are_silent() {
        let mut projector = Projector::new("json", false);
        assert!(!projector.is_zero(&LOOP));
        assert!(projector.has_zero(&ZERO_LOOP));
        assert!(projector.ancestors.is_empty());

        let identity = projector.try_enter(&LOOP);
        assert!(identity.is_some());
        assert!(projector.try_enter(&LOOP).is_none());
    }

    #[test]
    fn shared_structs_are_not_cycles() {
        let map = Record::new(&HEAD).map();
        assert_eq!(map["next"].get("id"), Some(&Value::Uint(2)));
        assert_eq!(map["next"].get("next"), Some(&Value::Null));

        let values = Record::new(&HEAD).values();
        assert_eq!(values, [Value::Uint(1), Value::Uint(2), Value::Null]);
    }
}
