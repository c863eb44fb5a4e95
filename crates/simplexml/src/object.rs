//! Field-level helpers called by `#[derive(XmlObject)]` expansions.
//!
//! Each persistent field is written as a child element tagged with the
//! field's tag name. On decode a field is populated only when exactly one
//! direct child carries its tag; otherwise the field keeps its default.

use simplexml_dom::Element;
use tracing::debug;

use crate::{DecodeContext, Error, Result, XmlObject, XmlType};

/// Append the element for one field, unless the value is absent.
pub fn encode_field<T: XmlType>(parent: &mut Element, tag: &str, value: &T) -> Result<()> {
    if value.is_absent() {
        return Ok(());
    }
    value.encode(parent.push_child(Element::new(tag)))
}

/// Decode one field from the children of `parent`.
///
/// Returns `None` when no child, or more than one child, carries `tag`.
pub fn decode_field<T: XmlType>(parent: &Element, tag: &str, ctx: &DecodeContext<'_>) -> Result<Option<T>> {
    let mut matches = parent.children_named(tag);
    match (matches.next(), matches.next()) {
        (None, _) => Ok(None),
        (Some(child), None) => T::decode(child, ctx).map(Some),
        (Some(_), Some(_)) => {
            debug!(
                parent = parent.tag(),
                tag,
                count = 2 + matches.count(),
                "field element is ambiguous, keeping default"
            );
            Ok(None)
        }
    }
}

/// Run the type's validation hook on a fully populated value.
pub fn finish<T: XmlObject>(value: T) -> Result<T> {
    match value.validate() {
        Ok(()) => Ok(value),
        Err(source) => Err(Error::Validation {
            type_name: T::TYPE_NAME,
            source,
        }),
    }
}
