//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `Typed`: a static `StructInfo` listing every field in declaration order.
/// - `Reflect`
/// - `Struct`
///
/// Tuple structs, unit structs, enums and unions have no named fields and are
/// rejected. Lifetime parameters are rejected too, reflected types are `'static`.
///
/// Every field type must implement `Reflect + Typed`, and each type parameter
/// gets a `Send + Sync + 'static` bound.
///
/// ## Field Metadata
///
/// A field is *exported* when it is declared `pub`. Any other visibility,
/// `pub(crate)` included, is unexported.
///
/// ### Tags
///
/// Raw tag strings are attached per namespace. The namespace is any
/// identifier and the value is kept verbatim, parsing happens at runtime.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct User {
///     #[reflect(tag(json = "name,omitempty", yaml = "-"))]
///     pub name: String,
/// }
/// ```
///
/// ### Embedded Fields
///
/// An embedded field promotes its own fields into the parent for name
/// lookups:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Admin {
///     #[reflect(embedded)]
///     pub user: User,
///     pub level: u8,
/// }
/// ```
///
/// ## Type Attributes
///
/// - `display`: expose `Display` as the value's string conversion.
/// - `debug`: use `Debug` for `reflect_debug` instead of the field-wise format.
/// - `default`: use `Default` for `reflect_zero` instead of zeroing each field,
///   and `PartialEq` against it for `reflect_is_zero`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// #[reflect(default, debug)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
