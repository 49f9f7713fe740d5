use proc_macro2::Span;
use syn::{Attribute, LitStr, meta::ParseNestedMeta};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field attributes, e.g. `#[reflect(embedded, tag(json = "id,omitempty"))]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `(namespace, raw tag)` in declaration order.
    pub tags: Vec<(String, LitStr)>,
    pub embedded: Option<Span>,
}

impl FieldAttributes {
    /// Parse every `#[reflect(...)]` attribute of the field.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("embedded") {
            if self.embedded.is_some() {
                return Err(meta.error("duplicate `embedded` flag"));
            }
            self.embedded = meta.path.get_ident().map(syn::Ident::span);
            Ok(())
        } else if meta.path.is_ident("tag") {
            meta.parse_nested_meta(|tag| self.parse_tag(tag))
        } else {
            Err(meta.error("expected `embedded` or `tag(...)`"))
        }
    }

    /// `namespace = "raw"` inside `tag(...)`.
    fn parse_tag(&mut self, tag: ParseNestedMeta) -> syn::Result<()> {
        let Some(namespace) = tag.path.get_ident().map(ToString::to_string) else {
            return Err(tag.error("expected a tag namespace, e.g. `json`"));
        };
        if self.tags.iter().any(|(ns, _)| *ns == namespace) {
            return Err(tag.error(format!("duplicate tag namespace `{namespace}`")));
        }
        let raw: LitStr = tag.value()?.parse()?;
        self.tags.push((namespace, raw));
        Ok(())
    }
}
