//! `XmlEnum` derive implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, DeriveInput};

use crate::utils::{parse_xml_attrs, type_name, validate_enum_with_unit_variants, AttrSite};

/// Main entry point for the XmlEnum derive macro.
pub fn derive_xml_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_xml_enum_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_xml_enum_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let variants = validate_enum_with_unit_variants(input, "XmlEnum")?;
    let attrs = parse_xml_attrs(&input.attrs, AttrSite::Enum)?;
    let type_name = type_name(name, attrs.rename.as_ref())?;

    let mut idents = Vec::with_capacity(variants.len());
    let mut literals: Vec<String> = Vec::with_capacity(variants.len());

    for variant in variants {
        let variant_attrs = parse_xml_attrs(&variant.attrs, AttrSite::Variant)?;
        let literal = match (&variant_attrs.rename, attrs.rename_all) {
            (Some(lit), _) => lit.value(),
            (None, Some(rule)) => rule.apply(&variant.ident.unraw().to_string()),
            (None, None) => variant.ident.unraw().to_string(),
        };
        if literals.contains(&literal) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("literal `{literal}` is used by more than one variant"),
            ));
        }
        idents.push(&variant.ident);
        literals.push(literal);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::simplexml::XmlType for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const SHAPE: ::simplexml::ShapeKind = ::simplexml::ShapeKind::Scalar;

            fn encode(&self, element: &mut ::simplexml::dom::Element) -> ::simplexml::Result<()> {
                let literal = match self {
                    #(Self::#idents => #literals,)*
                };
                element.set_text(literal);
                ::core::result::Result::Ok(())
            }

            fn decode(
                element: &::simplexml::dom::Element,
                _ctx: &::simplexml::DecodeContext<'_>,
            ) -> ::simplexml::Result<Self> {
                const LITERALS: &[&str] = &[#(#literals),*];
                match element.text_or_empty() {
                    #(#literals => ::core::result::Result::Ok(Self::#idents),)*
                    other => ::core::result::Result::Err(::simplexml::Error::conversion(
                        element,
                        #type_name,
                        other,
                        ::simplexml::scalar::ScalarError::UnknownLiteral { expected: LITERALS },
                    )),
                }
            }
        }
    })
}
