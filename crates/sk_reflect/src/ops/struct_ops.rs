use alloc::vec::Vec;

use crate::Reflect;
use crate::info::StructInfo;

// -----------------------------------------------------------------------------
// Struct

/// A [`Reflect`] subtrait for structs with named fields.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). Fields
/// are indexed in declaration order, private fields included.
///
/// # Examples
///
/// ```
/// use sk_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: u32,
///     b: String,
/// }
///
/// let foo = Foo { a: 1, b: String::from("x") };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert_eq!(foo.field("a").and_then(|v| v.downcast_ref::<u32>()), Some(&1));
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name` as a
    /// `&dyn Reflect`.
    ///
    /// Returns `None` if the field does not exist.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field named `name`
    /// as a `&mut dyn Reflect`.
    ///
    /// Returns `None` if the field does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo{ a: i32, b: bool };
    ///
    /// let mut ts = Foo{ a: 1, b: true };
    ///
    /// if let Some(field) = ts.field_mut("a") {
    ///     *field.downcast_mut::<i32>().unwrap() = 42;
    /// }
    ///
    /// assert_eq!(ts.a, 42);
    /// ```
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns a reference to the value of the field with index `index` as a
    /// `&dyn Reflect`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field with index `index`
    /// as a `&mut dyn Reflect`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field with index `index`.
    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.struct_info().field_at(index).map(|field| field.name())
    }

    /// Returns the number of fields in the struct.
    #[inline]
    fn field_len(&self) -> usize {
        self.struct_info().field_len()
    }

    /// Returns an iterator over the values of the struct's fields.
    ///
    /// The iterator yields references to each field in order,
    /// from index 0 to `field_len() - 1`.
    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Returns mutable references to every field at once, in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo{ a: i32, b: i32 };
    ///
    /// let mut ts = Foo{ a: 1, b: 2 };
    ///
    /// for field in ts.fields_mut() {
    ///     *field.downcast_mut::<i32>().unwrap() *= 10;
    /// }
    ///
    /// assert_eq!((ts.a, ts.b), (10, 20));
    /// ```
    fn fields_mut(&mut self) -> Vec<&mut dyn Reflect>;

    /// Returns the static [`StructInfo`] of the struct.
    fn struct_info(&self) -> StructInfo;
}

impl dyn Struct {
    /// Returns a typed reference to the field at the given field name.
    ///
    /// Returns `None` if:
    /// - The field does not exist.
    /// - The field cannot be downcast to type `T`
    ///
    /// # Examples
    ///
    /// ```
    /// # use sk_reflect::{ops::Struct, derive::Reflect};
    /// #[derive(Reflect)]
    /// struct Foo{ a: i32, b: &'static str };
    ///
    /// let foo = Foo{ a: 10_i32, b: "hello" };
    /// let foo_ref: &dyn Struct = &foo;
    ///
    /// assert_eq!(foo_ref.field_as::<i32>("a"), Some(&10));
    /// assert_eq!(foo_ref.field_as::<&str>("b"), Some(&"hello"));
    /// assert_eq!(foo_ref.field_as::<i32>("c"), None); // Missing
    /// assert_eq!(foo_ref.field_as::<f64>("a"), None); // Wrong type
    /// ```
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a typed mutable reference to the field at the given field name.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// An iterator over the field values of a struct.
///
/// This is an [`ExactSizeIterator`] that yields references to each field
/// in the struct in order.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::fmt;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::Struct;
    use crate::value::Value;

    #[derive(Reflect)]
    struct Inner {
        pub x: i32,
    }

    #[derive(Reflect)]
    struct Outer {
        #[reflect(tag(json = "name,omitempty", yaml = "-"))]
        pub name: String,
        #[reflect(embedded)]
        pub inner: Inner,
        secret: u8,
        pub(crate) hidden: bool,
    }

    #[derive(Reflect)]
    struct Wrapper<T> {
        pub items: Vec<T>,
    }

    #[derive(Reflect)]
    struct Empty {}

    #[derive(Reflect, Debug, Default, PartialEq)]
    #[reflect(display, debug, default)]
    struct Celsius {
        pub degrees: i32,
    }

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}C", self.degrees)
        }
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

    fn outer() -> Outer {
        Outer {
            name: String::from("a"),
            inner: Inner { x: 5 },
            secret: 7,
            hidden: true,
        }
    }

    #[test]
    fn field_table() {
        let info = Outer::type_info();
        let info = info.as_struct().unwrap();

        assert_eq!(info.ident(), "Outer");
        assert_eq!(info.field_len(), 4);

        let name = info.field("name").unwrap();
        assert!(name.is_exported());
        assert_eq!(name.tag("json"), Some("name,omitempty"));
        assert_eq!(name.tag("yaml"), Some("-"));
        assert_eq!(name.tag("toml"), None);

        assert!(info.field("inner").unwrap().is_embedded());
        assert!(!info.field("secret").unwrap().is_exported());
        assert!(!info.field("hidden").unwrap().is_exported());
    }

    #[test]
    fn access_fields() {
        let mut outer = outer();
        assert_eq!(outer.reflect_kind(), ReflectKind::Struct);
        assert_eq!(outer.field_len(), 4);
        assert_eq!(outer.name_at(2), Some("secret"));
        assert_eq!(outer.name_at(4), None);

        let dyn_struct: &dyn Struct = &outer;
        assert_eq!(dyn_struct.field_as::<u8>("secret"), Some(&7));
        assert_eq!(dyn_struct.iter_fields().len(), 4);

        *outer.field_at_mut(0).unwrap().downcast_mut::<String>().unwrap() = String::from("b");
        assert_eq!(outer.name, "b");

        let fields = outer.fields_mut();
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn zero_value() {
        let outer = outer();
        assert!(!outer.reflect_is_zero());

        let zero = outer.reflect_zero().take::<Outer>().unwrap();
        assert!(zero.reflect_is_zero());
        assert_eq!(zero.inner.x, 0);
        assert!(!zero.hidden);

        assert!(Empty {}.reflect_is_zero());
    }

    #[test]
    fn declared_zero_value() {
        assert!(Port { n: 80 }.reflect_is_zero());
        assert!(!Port { n: 0 }.reflect_is_zero());

        let zero = Port { n: 443 }.reflect_zero();
        assert!((*zero).reflect_is_zero());
        assert_eq!(zero.take::<Port>().map(|port| port.n).ok(), Some(80));
    }

    #[test]
    fn set_whole_struct() {
        let mut inner = Inner { x: 1 };
        inner.set(Box::new(Inner { x: 9 })).unwrap();
        assert_eq!(inner.x, 9);
        assert!(inner.set(Box::new(9_i32)).is_err());
    }

    #[test]
    fn generic_struct() {
        let wrapper = Wrapper { items: Vec::from([1_u8, 2]) };
        let info = <Wrapper<u8> as Typed>::type_info();

        assert_eq!(info.as_struct().unwrap().ident(), "Wrapper");
        assert_eq!(wrapper.to_value().get("items"), Some(&Value::from(Vec::from([1_u8, 2]))));
    }

    #[test]
    fn container_flags() {
        let c = Celsius { degrees: 21 };
        assert_eq!(c.reflect_display().unwrap().to_string(), "21C");
        assert_eq!(format!("{:?}", &c as &dyn Reflect), "Celsius { degrees: 21 }");
        assert_eq!(c.reflect_zero().take::<Celsius>().unwrap(), Celsius::default());

        let some = Some(Celsius { degrees: 5 });
        assert_eq!(some.reflect_display().unwrap().to_string(), "5C");
        assert!(None::<Celsius>.reflect_display().is_none());

        assert!(Inner { x: 1 }.reflect_display().is_none());
        assert_eq!(format!("{:?}", &Inner { x: 1 } as &dyn Reflect), "Inner { x: 1 }");
    }
}
