use syn::{Attribute, meta::ParseNestedMeta};

use super::TraitAvailableFlags;
use crate::REFLECT_ATTRIBUTE_NAME;

/// Container attributes, e.g. `#[reflect(display, debug)]`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub avail_traits: TraitAvailableFlags,
}

impl TypeAttributes {
    /// Parse every `#[reflect(...)]` attribute of the type.
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
        let span = meta.path.get_ident().map(syn::Ident::span);
        let flag = if meta.path.is_ident("default") {
            &mut self.avail_traits.default
        } else if meta.path.is_ident("debug") {
            &mut self.avail_traits.debug
        } else if meta.path.is_ident("display") {
            &mut self.avail_traits.display
        } else {
            return Err(meta.error("expected one of `default`, `debug`, `display`"));
        };

        if flag.is_some() {
            return Err(meta.error("duplicate flag"));
        }
        *flag = span;
        Ok(())
    }
}
