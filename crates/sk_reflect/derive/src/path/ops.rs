use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn reflect_ref_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::ops::ReflectRef
    }
}

#[inline]
pub(crate) fn reflect_mut_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::ops::ReflectMut
    }
}

#[inline]
pub(crate) fn struct_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::ops::Struct
    }
}

#[inline]
pub(crate) fn struct_field_iter_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::ops::StructFieldIter
    }
}
