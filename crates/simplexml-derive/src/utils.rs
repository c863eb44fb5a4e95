//! Shared utilities for the derive macros.

use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, LitStr, Variant};

/// Validate that the input is a struct with named fields, returning the fields.
pub fn validate_struct_with_named_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive only supports structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

/// Validate that the input is a non-empty enum of unit variants.
pub fn validate_enum_with_unit_variants<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Variant, Comma>> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports enums"),
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive needs at least one variant"),
        ));
    }
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("{macro_name} derive only supports unit variants"),
            ));
        }
    }
    Ok(&data.variants)
}

/// Where an `#[xml(...)]` attribute was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrSite {
    Struct,
    Field,
    Enum,
    Variant,
}

impl AttrSite {
    fn allows(self, key: &str) -> bool {
        match self {
            Self::Struct => matches!(key, "rename" | "validate"),
            Self::Field => matches!(key, "rename" | "skip"),
            Self::Enum => matches!(key, "rename" | "rename_all"),
            Self::Variant => key == "rename",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Field => "field",
            Self::Enum => "enum",
            Self::Variant => "variant",
        }
    }
}

/// Parsed `#[xml(...)]` options.
#[derive(Default)]
pub struct XmlAttrs {
    pub rename: Option<LitStr>,
    pub rename_all: Option<RenameRule>,
    pub skip: bool,
    pub validate: bool,
}

/// Parse every `#[xml(...)]` attribute in `attrs`, rejecting options that
/// do not apply at `site`.
pub fn parse_xml_attrs(attrs: &[Attribute], site: AttrSite) -> syn::Result<XmlAttrs> {
    let mut out = XmlAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("xml") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .map(|ident| ident.to_string())
                .unwrap_or_default();
            if !site.allows(&key) {
                return Err(meta.error(format!(
                    "unsupported xml attribute on a {}",
                    site.as_str()
                )));
            }

            match key.as_str() {
                "rename" => out.rename = Some(meta.value()?.parse()?),
                "rename_all" => {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename_all = Some(RenameRule::parse(&lit)?);
                }
                "skip" => out.skip = true,
                "validate" => out.validate = true,
                _ => {}
            }
            Ok(())
        })?;
    }

    Ok(out)
}

/// Literal style for enum variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    Upper,
    Lower,
    ScreamingSnake,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "UPPERCASE" => Ok(Self::Upper),
            "lowercase" => Ok(Self::Lower),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            _ => Err(syn::Error::new_spanned(
                lit,
                "expected \"UPPERCASE\", \"lowercase\" or \"SCREAMING_SNAKE_CASE\"",
            )),
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Upper => name.to_uppercase(),
            Self::Lower => name.to_lowercase(),
            Self::ScreamingSnake => {
                let mut out = String::with_capacity(name.len() + 4);
                for (i, c) in name.chars().enumerate() {
                    if c.is_uppercase() && i > 0 {
                        out.push('_');
                    }
                    out.extend(c.to_uppercase());
                }
                out
            }
        }
    }
}

/// Uppercase the first letter and the letter after each underscore,
/// dropping the underscores: `first_name` and `firstName` both give
/// `FirstName`.
pub fn upper_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Check that `tag` can be used as an element name.
pub fn is_xml_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

/// Element tag for a renamed item, checked to be a valid name.
pub fn checked_rename(lit: &LitStr) -> syn::Result<String> {
    let tag = lit.value();
    if is_xml_name(&tag) {
        Ok(tag)
    } else {
        Err(syn::Error::new_spanned(lit, format!("`{tag}` is not a valid XML element name")))
    }
}

/// Element tag derived from a field identifier.
pub fn field_tag(ident: &Ident) -> syn::Result<String> {
    let tag = upper_camel(&ident.unraw().to_string());
    if is_xml_name(&tag) {
        Ok(tag)
    } else {
        Err(syn::Error::new_spanned(
            ident,
            "field name does not produce a valid XML element name, add #[xml(rename = \"...\")]",
        ))
    }
}

/// Type name of the deriving type: the rename if given, else the identifier.
pub fn type_name(ident: &Ident, rename: Option<&LitStr>) -> syn::Result<String> {
    match rename {
        Some(lit) => checked_rename(lit),
        None => Ok(ident.unraw().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_camel() {
        assert_eq!(upper_camel("first_name"), "FirstName");
        assert_eq!(upper_camel("firstName"), "FirstName");
        assert_eq!(upper_camel("is_detective"), "IsDetective");
        assert_eq!(upper_camel("age"), "Age");
        assert_eq!(upper_camel("book_list"), "BookList");
        assert_eq!(upper_camel("_private__field"), "PrivateField");
        assert_eq!(upper_camel("x1"), "X1");
    }

    #[test]
    fn test_field_tag_strips_raw_prefix() {
        let ident: Ident = syn::parse_str("r#type").unwrap();
        assert_eq!(field_tag(&ident).unwrap(), "Type");
    }

    #[test]
    fn test_field_tag_rejects_empty() {
        let ident: Ident = syn::parse_str("__").unwrap();
        assert!(field_tag(&ident).is_err());
    }

    #[test]
    fn test_rename_rules() {
        assert_eq!(RenameRule::Upper.apply("Male"), "MALE");
        assert_eq!(RenameRule::Lower.apply("Male"), "male");
        assert_eq!(RenameRule::ScreamingSnake.apply("NotKnown"), "NOT_KNOWN");
    }

    #[test]
    fn test_is_xml_name() {
        assert!(is_xml_name("Person"));
        assert!(is_xml_name("book-list.v2"));
        assert!(is_xml_name("dc:Title"));
        assert!(is_xml_name(":root"));
        assert!(!is_xml_name(""));
        assert!(!is_xml_name("1st"));
        assert!(!is_xml_name("a b"));
    }

    #[test]
    fn test_parse_attrs() {
        let input: DeriveInput = syn::parse_quote! {
            #[xml(rename = "Span", validate)]
            struct Range {
                #[xml(skip)]
                low: i32,
            }
        };
        let attrs = parse_xml_attrs(&input.attrs, AttrSite::Struct).unwrap();
        assert_eq!(attrs.rename.map(|lit| lit.value()).as_deref(), Some("Span"));
        assert!(attrs.validate);

        assert!(parse_xml_attrs(&input.attrs, AttrSite::Field).is_err());

        let fields = validate_struct_with_named_fields(&input, "XmlObject").unwrap();
        let field_attrs = parse_xml_attrs(&fields[0].attrs, AttrSite::Field).unwrap();
        assert!(field_attrs.skip);
    }

    #[test]
    fn test_rejects_data_variants() {
        let input: DeriveInput = syn::parse_quote! {
            enum Shape { Circle(f64), Square }
        };
        assert!(validate_enum_with_unit_variants(&input, "XmlEnum").is_err());

        let input: DeriveInput = syn::parse_quote! {
            struct Unit;
        };
        assert!(validate_struct_with_named_fields(&input, "XmlObject").is_err());
    }
}
