//! Derive macros for the `simplexml` codec.
//!
//! - `#[derive(XmlObject)]` on structs with named fields
//! - `#[derive(XmlEnum)]` on enums with unit variants
//!
//! The generated code refers to the runtime crate as `::simplexml`.

use proc_macro::TokenStream;

mod enums;
mod object;
mod utils;

/// Derive `XmlType` and `XmlObject` for a struct with named fields.
///
/// The struct must implement `Default`; decoding starts from the default
/// value and overwrites the fields found in the document.
///
/// Container attributes:
/// - `#[xml(rename = "Name")]` sets the element tag of the type
/// - `#[xml(validate)]` runs the type's `Validate` impl after decoding
///
/// Field attributes:
/// - `#[xml(skip)]` excludes the field from encoding and decoding
/// - `#[xml(rename = "Tag")]` sets the field's element tag
#[proc_macro_derive(XmlObject, attributes(xml))]
pub fn derive_xml_object(input: TokenStream) -> TokenStream {
    object::derive_xml_object(input)
}

/// Derive `XmlType` for an enum with unit variants, encoded as a text
/// literal.
///
/// Container attributes:
/// - `#[xml(rename = "Name")]` sets the element tag of the type
/// - `#[xml(rename_all = "...")]` with `UPPERCASE`, `lowercase` or
///   `SCREAMING_SNAKE_CASE` sets the literal style
///
/// Variant attributes:
/// - `#[xml(rename = "LITERAL")]` sets one variant's literal
#[proc_macro_derive(XmlEnum, attributes(xml))]
pub fn derive_xml_enum(input: TokenStream) -> TokenStream {
    enums::derive_xml_enum(input)
}
