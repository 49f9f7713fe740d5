use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident, Visibility};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// A parsed named field.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Declaration index.
    pub index: usize,
}

impl StructField<'_> {
    #[inline]
    pub fn ident(&self) -> &Ident {
        match &self.data.ident {
            Some(ident) => ident,
            None => unreachable!("named fields always have an ident"),
        }
    }

    /// The declared name, as the string used in the field table.
    #[inline]
    pub fn name(&self) -> String {
        self.ident().to_string()
    }

    /// Only `pub` fields count as exported.
    #[inline]
    pub fn is_exported(&self) -> bool {
        matches!(self.data.vis, Visibility::Public(_))
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct with named fields, ready for code generation.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    /// Parse the derive input.
    ///
    /// Only structs with named fields can describe records, anything else is
    /// rejected with a compile error.
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        const ONLY_NAMED: &str = "`#[derive(Reflect)]` only supports structs with named fields";

        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(fields) => return Err(syn::Error::new_spanned(fields, ONLY_NAMED)),
                Fields::Unit => return Err(syn::Error::new_spanned(&input.ident, ONLY_NAMED)),
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(data.enum_token.span, ONLY_NAMED));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(data.union_token.span, ONLY_NAMED));
            }
        };

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`#[derive(Reflect)]` requires `'static` types, lifetime parameters are not supported",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        let fields = named
            .named
            .iter()
            .enumerate()
            .map(|(index, data)| {
                Ok(StructField {
                    data,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                    index,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// The where clause shared by the generated impls: every field type must
    /// be `Reflect + Typed`.
    pub fn where_clause(&self) -> TokenStream {
        let sk_reflect_path = self.meta.sk_reflect_path();
        let reflect_ = crate::path::reflect_(sk_reflect_path);
        let typed_ = crate::path::typed_(sk_reflect_path);

        let field_types = self.fields.iter().map(|field| &field.data.ty);

        self.meta.where_clause(quote! {
            #(#field_types: #reflect_ + #typed_,)*
        })
    }

    /// Generate the field table expression, e.g.
    ///
    /// ```ignore
    /// [
    ///     _path_::NamedField::new("a").with_exported(true).with_tags(&[("json", "a,omitempty")]),
    ///     ......
    /// ]
    /// ```
    pub fn field_table(&self) -> TokenStream {
        let named_field_ = crate::path::named_field_(self.meta.sk_reflect_path());

        let entries = self.fields.iter().map(|field| {
            let name = field.name();
            let exported = field.is_exported().then(|| quote!(.with_exported(true)));
            let embedded = field.attrs.embedded.map(|_| quote!(.with_embedded(true)));
            let tags = (!field.attrs.tags.is_empty()).then(|| {
                let pairs = field
                    .attrs
                    .tags
                    .iter()
                    .map(|(namespace, raw)| quote!((#namespace, #raw)));
                quote!(.with_tags(&[#(#pairs),*]))
            });

            quote! {
                #named_field_::new(#name) #exported #embedded #tags
            }
        });

        quote!([#(#entries),*])
    }
}

// -----------------------------------------------------------------------------
// FieldAccessors

/// Token pieces used in field `match` arms.
pub(crate) struct FieldAccessors {
    /// `&self.a`
    pub fields_ref: Vec<TokenStream>,
    /// `&mut self.a`
    pub fields_mut: Vec<TokenStream>,
    /// `0usize`, unsuffixed.
    pub field_indices: Vec<Literal>,
    /// `"a"`
    pub field_names: Vec<String>,
    pub field_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let fields = info.fields();
        Self {
            fields_ref: fields
                .iter()
                .map(|field| {
                    let ident = field.ident();
                    quote!(&self.#ident)
                })
                .collect(),
            fields_mut: fields
                .iter()
                .map(|field| {
                    let ident = field.ident();
                    quote!(&mut self.#ident)
                })
                .collect(),
            field_indices: fields
                .iter()
                .map(|field| Literal::usize_unsuffixed(field.index))
                .collect(),
            field_names: fields.iter().map(StructField::name).collect(),
            field_count: fields.len(),
        }
    }
}
