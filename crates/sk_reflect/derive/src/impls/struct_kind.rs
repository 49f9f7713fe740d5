use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{impl_trait_reflect, impl_trait_typed};
use crate::derive_data::{FieldAccessors, ReflectStruct};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(info);

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(info);

    quote! {
        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::OptionFP;
    let meta = info.meta();

    let sk_reflect_path = meta.sk_reflect_path();
    let struct_ = crate::path::struct_(sk_reflect_path);
    let reflect_ = crate::path::reflect_(sk_reflect_path);
    let typed_ = crate::path::typed_(sk_reflect_path);
    let type_info_ = crate::path::type_info_(sk_reflect_path);
    let struct_info_ = crate::path::struct_info_(sk_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(sk_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(sk_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let FieldAccessors {
        fields_ref,
        fields_mut,
        field_indices,
        field_names,
        field_count,
    } = FieldAccessors::new(info);

    let ident = meta.ident();
    let (impl_generics, ty_generics) = meta.split_generics();
    let where_clause = info.where_clause();

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #OptionFP<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_ref),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #OptionFP<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_mut),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at(&self, index: usize) -> #OptionFP<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #OptionFP<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #OptionFP::None,
                }
            }

            fn name_at(&self, index: usize) -> #OptionFP<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #OptionFP::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }

            fn fields_mut(&mut self) -> #macro_utils_::Vec<&mut dyn #reflect_> {
                #macro_utils_::Vec::from([
                    #(#fields_mut as &mut dyn #reflect_,)*
                ])
            }

            #[inline]
            fn struct_info(&self) -> #struct_info_ {
                match <Self as #typed_>::type_info() {
                    #type_info_::Struct(info) => info,
                    _ => ::core::unreachable!("derived `Typed` always returns `TypeInfo::Struct`"),
                }
            }
        }
    }
}
