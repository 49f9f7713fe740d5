use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn typed_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::info::Type
    }
}

#[inline(always)]
pub(crate) fn type_info_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::info::ReflectKind
    }
}
