use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, TypeGenerics};

use super::TypeAttributes;

/// Type-level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    sk_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("sk_reflect_path", &self.sk_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            ident,
            generics,
            sk_reflect_path: crate::path::sk_reflect(),
        }
    }

    #[inline]
    pub fn sk_reflect_path(&self) -> &Path {
        &self.sk_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// Split generics for an `impl` block.
    ///
    /// The where clause is returned separately by
    /// [`ReflectStruct::where_clause`](crate::derive_data::ReflectStruct::where_clause),
    /// since it depends on the field types.
    #[inline]
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>) {
        let (impl_generics, ty_generics, _) = self.generics.split_for_impl();
        (impl_generics, ty_generics)
    }

    /// Generate the where clause: the user's own predicates, `Send + Sync + 'static`
    /// for each type parameter, plus `extra` predicates.
    pub fn where_clause(&self, extra: TokenStream) -> TokenStream {
        use crate::path::fp::{SendFP, SyncFP};

        let predicates = self
            .generics
            .where_clause
            .iter()
            .flat_map(|clause| clause.predicates.iter());
        let type_params = self.generics.type_params().map(|param| &param.ident);
        let send_ = SendFP.to_token_stream();
        let sync_ = SyncFP.to_token_stream();

        quote! {
            where
                #(#predicates,)*
                #(#type_params: #send_ + #sync_ + 'static,)*
                #extra
        }
    }
}
