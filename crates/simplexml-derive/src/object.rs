//! `XmlObject` derive implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, DeriveInput};

use crate::utils::{
    checked_rename, field_tag, parse_xml_attrs, type_name, validate_struct_with_named_fields, AttrSite,
};

/// Main entry point for the XmlObject derive macro.
pub fn derive_xml_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_xml_object_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_xml_object_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = validate_struct_with_named_fields(input, "XmlObject")?;
    let attrs = parse_xml_attrs(&input.attrs, AttrSite::Struct)?;
    let type_name = type_name(name, attrs.rename.as_ref())?;

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut encodes = Vec::new();
    let mut decodes = Vec::new();
    let mut tags: Vec<String> = Vec::with_capacity(fields.len());

    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;
        let ty = &field.ty;
        let field_attrs = parse_xml_attrs(&field.attrs, AttrSite::Field)?;
        let field_name = ident.unraw().to_string();
        let tag = match &field_attrs.rename {
            Some(lit) => checked_rename(lit)?,
            None => field_tag(ident)?,
        };

        if field_attrs.skip {
            descriptors.push(quote! {
                ::simplexml::FieldDescriptor::skipped(#field_name, #tag)
            });
            continue;
        }

        if tags.contains(&tag) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("element tag `{tag}` is used by more than one field"),
            ));
        }

        descriptors.push(quote! {
            ::simplexml::FieldDescriptor::persistent::<#ty>(#field_name, #tag)
        });
        encodes.push(quote! {
            ::simplexml::object::encode_field(element, #tag, &self.#ident)?;
        });
        decodes.push(quote! {
            if let ::core::option::Option::Some(field) =
                ::simplexml::object::decode_field::<#ty>(element, #tag, ctx)?
            {
                value.#ident = field;
            }
        });
        tags.push(tag);
    }

    let mut generics = input.generics.clone();
    if input.generics.type_params().next().is_some() {
        let (_, ty_generics, _) = input.generics.split_for_impl();
        let where_clause = generics.make_where_clause();
        for param in input.generics.type_params() {
            let param = &param.ident;
            where_clause
                .predicates
                .push(parse_quote!(#param: ::simplexml::XmlType));
        }
        where_clause
            .predicates
            .push(parse_quote!(#name #ty_generics: ::core::default::Default));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let validate = if attrs.validate {
        quote! {
            fn validate(&self) -> ::core::result::Result<(), ::simplexml::ValidationError> {
                <Self as ::simplexml::Validate>::validate(self)
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #impl_generics ::simplexml::XmlType for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const SHAPE: ::simplexml::ShapeKind = ::simplexml::ShapeKind::Object;

            #[allow(unused_variables)]
            fn encode(&self, element: &mut ::simplexml::dom::Element) -> ::simplexml::Result<()> {
                #(#encodes)*
                ::core::result::Result::Ok(())
            }

            #[allow(unused_mut, unused_variables)]
            fn decode(
                element: &::simplexml::dom::Element,
                ctx: &::simplexml::DecodeContext<'_>,
            ) -> ::simplexml::Result<Self> {
                let mut value = <Self as ::core::default::Default>::default();
                #(#decodes)*
                ::simplexml::object::finish(value)
            }
        }

        impl #impl_generics ::simplexml::XmlObject for #name #ty_generics #where_clause {
            const FIELDS: &'static [::simplexml::FieldDescriptor] = &[#(#descriptors),*];

            #validate
        }
    })
}
