//! This independent module is used to provide the required path.
//! So as to minimize changes when the `sk_reflect` structure is modified.
//!
//! The only special feature is the path of sk_reflect itself,
//! See [`sk_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `sk_reflect` crate.
///
/// Not all crates can access the reflection crate through `sk_reflect`,
/// we have to scan the builder's `Cargo.toml`.
///
/// 1. For crates that depend on `sk_reflect`, `::sk_reflect` is returned here.
/// 2. For crates that depend on `structkit`, `::structkit::reflect` is returned here.
/// 3. For crates that depend on `sk`, `::sk::reflect` is returned here.
/// 4. For other situations, `::sk_reflect` is returned here, but this may be incorrect.
///
/// Reading the manifest is relatively expensive, so the path is obtained once
/// per derive and passed around.
pub(crate) fn sk_reflect() -> syn::Path {
    sk_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sk_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_utils_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(sk_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sk_reflect_path::Reflect
    }
}
