use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Typed` trait.
///
/// The field table lives in a `static` inside `type_info`, it never depends
/// on generic parameters.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let sk_reflect_path = meta.sk_reflect_path();

    let typed_ = crate::path::typed_(sk_reflect_path);
    let type_ = crate::path::type_(sk_reflect_path);
    let type_info_ = crate::path::type_info_(sk_reflect_path);
    let struct_info_ = crate::path::struct_info_(sk_reflect_path);
    let named_field_ = crate::path::named_field_(sk_reflect_path);

    let ident = meta.ident();
    let ident_name = ident.to_string();
    let field_count = info.fields().len();
    let field_table = info.field_table();

    let (impl_generics, ty_generics) = meta.split_generics();
    let where_clause = info.where_clause();

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> #type_info_ {
                static FIELDS: [#named_field_; #field_count] = #field_table;

                #type_info_::Struct(#struct_info_::new(
                    #type_::of::<Self>(),
                    #ident_name,
                    &FIELDS,
                ))
            }
        }
    }
}
