// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// Holds what a record walker needs to know about a declared field without
/// touching its value: the declared name, whether it is visible outside its
/// module (`pub`), whether it is embedded (its own fields are promoted into
/// the parent for name lookups) and the raw tag string per namespace.
///
/// All constructors are `const`, so the derive macro can place field tables
/// in `static` items.
///
/// # Examples
///
/// ```
/// use sk_reflect::info::NamedField;
///
/// const FIELD: NamedField = NamedField::new("age")
///     .with_exported(true)
///     .with_tags(&[("json", "age,omitempty"), ("yaml", "-")]);
///
/// assert_eq!(FIELD.name(), "age");
/// assert_eq!(FIELD.tag("json"), Some("age,omitempty"));
/// assert_eq!(FIELD.tag("toml"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedField {
    name: &'static str,
    exported: bool,
    embedded: bool,
    tags: &'static [(&'static str, &'static str)],
}

impl NamedField {
    /// Creates a new unexported, non-embedded [`NamedField`] without tags.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            exported: false,
            embedded: false,
            tags: &[],
        }
    }

    /// Sets whether the field is visible outside its module.
    #[inline]
    pub const fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Sets whether the field is embedded.
    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Sets the raw tag table, as `(namespace, raw tag)` pairs.
    #[inline]
    pub const fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the field is declared `pub`.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Returns `true` if the field is marked `#[reflect(embedded)]`.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the raw tag of the given namespace.
    ///
    /// When a namespace is given twice, the first one wins.
    pub fn tag(&self, namespace: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(key, _)| *key == namespace)
            .map(|(_, raw)| *raw)
    }

    /// Returns the full raw tag table.
    #[inline]
    pub const fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }
}
