use crate::info::{NamedField, Type};

/// Type information for a struct with named fields.
///
/// # Examples
///
/// ```
/// use sk_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: i32,
///     b: bool,
/// }
///
/// let info = Foo::type_info().as_struct().copied().unwrap();
///
/// assert_eq!(info.ident(), "Foo");
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("b"), Some(1));
/// assert!(info.field("a").unwrap().is_exported());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StructInfo {
    ty: Type,
    ident: &'static str,
    fields: &'static [NamedField],
}

impl StructInfo {
    /// Creates a new [`StructInfo`].
    ///
    /// `fields` must be in declaration order.
    #[inline]
    pub const fn new(ty: Type, ident: &'static str, fields: &'static [NamedField]) -> Self {
        Self { ty, ident, fields }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the declared type name, without module path or generics.
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Returns every field in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [NamedField] {
        self.fields
    }

    /// Returns the number of fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static NamedField> {
        self.fields.get(index)
    }

    /// Returns the field named `name`.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&'static NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the index of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }
}
