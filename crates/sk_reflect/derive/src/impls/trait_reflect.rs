use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::{ReflectMeta, ReflectStruct};

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::ResultFP;

    let meta = info.meta();
    let sk_reflect_path = meta.sk_reflect_path();

    let reflect_ = crate::path::reflect_(sk_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(sk_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(sk_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(sk_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(sk_reflect_path);

    let reflect_zero_tokens = get_struct_zero_impl(info);
    let reflect_display_tokens = get_struct_display_impl(meta);
    let reflect_debug_tokens = get_struct_debug_impl(meta);

    let ident = meta.ident();
    let (impl_generics, ty_generics) = meta.split_generics();
    let where_clause = info.where_clause();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            fn set(&mut self, value: #macro_utils_::Box<dyn #reflect_>) -> #ResultFP<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            #reflect_zero_tokens

            #reflect_display_tokens

            #reflect_debug_tokens
        }
    }
}

/// Generate `Reflect::reflect_zero` implementation tokens.
///
/// Field-wise zero by default. With `#[reflect(default)]` the zero value is
/// `Default::default()`, and `reflect_is_zero` compares against it.
fn get_struct_zero_impl(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::{DefaultFP, PartialEqFP};

    let meta = info.meta();
    let sk_reflect_path = meta.sk_reflect_path();
    let reflect_ = crate::path::reflect_(sk_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(sk_reflect_path);

    if let Some(span) = meta.attrs().avail_traits.default {
        quote_spanned! { span =>
            #[inline]
            fn reflect_zero(&self) -> #macro_utils_::Box<dyn #reflect_> {
                #macro_utils_::Box::new(<Self as #DefaultFP>::default())
            }

            #[inline]
            fn reflect_is_zero(&self) -> bool {
                <Self as #PartialEqFP>::eq(self, &<Self as #DefaultFP>::default())
            }
        }
    } else {
        let idents = info.fields().iter().map(|field| field.ident());
        let zeros = info.fields().iter().map(|field| {
            let ident = field.ident();
            quote!(#macro_utils_::zero_of(&self.#ident))
        });
        quote! {
            fn reflect_zero(&self) -> #macro_utils_::Box<dyn #reflect_> {
                #macro_utils_::Box::new(Self {
                    #(#idents: #zeros,)*
                })
            }
        }
    }
}

/// Generate `Reflect::reflect_display` implementation tokens.
fn get_struct_display_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::{DisplayFP, OptionFP};

    match meta.attrs().avail_traits.display {
        Some(span) => quote_spanned! { span =>
            #[inline]
            fn reflect_display(&self) -> #OptionFP<&dyn #DisplayFP> {
                #OptionFP::Some(self)
            }
        },
        None => TokenStream::new(),
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_struct_debug_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::{DebugFP, FmtResultFP, FormatterFP};

    let macro_utils_ = crate::path::macro_utils_(meta.sk_reflect_path());

    match meta.attrs().avail_traits.debug {
        Some(span) => quote_spanned! { span =>
            #[inline]
            fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
                <Self as #DebugFP>::fmt(self, f)
            }
        },
        None => quote! {
            #[inline]
            fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
                #macro_utils_::struct_debug(self, f)
            }
        },
    }
}
