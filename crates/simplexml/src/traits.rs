//! The traits every mapped type implements.

use simplexml_dom::Element;

use crate::{DecodeContext, FieldDescriptor, Result, ShapeKind, ValidationError};

/// A type that can be written into an element and read back from one.
///
/// Implementations exist for the supported scalar types, the standard
/// containers and `Option`. Structs and enums get theirs from
/// `#[derive(XmlObject)]` and `#[derive(XmlEnum)]`.
///
/// Element tags for container items are taken from [`runtime_name`] when
/// encoding but from the declared [`TYPE_NAME`] when decoding. The two only
/// differ if an implementation overrides `runtime_name`, and such values will
/// not be found again on decode.
///
/// [`runtime_name`]: XmlType::runtime_name
/// [`TYPE_NAME`]: XmlType::TYPE_NAME
pub trait XmlType: Sized {
    /// Simple type name.
    const TYPE_NAME: &'static str;

    /// Shape of the type.
    const SHAPE: ShapeKind;

    /// Element tag used for this value inside containers and at the root.
    fn runtime_name(&self) -> &str {
        Self::TYPE_NAME
    }

    /// Whether this value is the null value, which produces no element.
    fn is_absent(&self) -> bool {
        false
    }

    /// Write this value's content (text or children) into `element`.
    fn encode(&self, element: &mut Element) -> Result<()>;

    /// Build a value from the content of `element`.
    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self>;
}

/// An object type with named fields.
pub trait XmlObject: XmlType {
    /// Declared fields in declaration order, including non-persistent ones.
    const FIELDS: &'static [FieldDescriptor];

    /// Hook run after all fields of a decoded value are populated.
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Ok(())
    }
}

/// Post-decode validation, enabled per type with `#[xml(validate)]`.
pub trait Validate {
    /// Check the populated value.
    fn validate(&self) -> std::result::Result<(), ValidationError>;
}

impl<T: XmlType> XmlType for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;
    const SHAPE: ShapeKind = T::SHAPE;

    fn runtime_name(&self) -> &str {
        match self {
            Some(value) => value.runtime_name(),
            None => T::TYPE_NAME,
        }
    }

    fn is_absent(&self) -> bool {
        match self {
            Some(value) => value.is_absent(),
            None => true,
        }
    }

    fn encode(&self, element: &mut Element) -> Result<()> {
        match self {
            Some(value) => value.encode(element),
            None => Ok(()),
        }
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        T::decode(element, ctx).map(Some)
    }
}

impl<T: XmlType> XmlType for Box<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;
    const SHAPE: ShapeKind = T::SHAPE;

    fn runtime_name(&self) -> &str {
        (**self).runtime_name()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn encode(&self, element: &mut Element) -> Result<()> {
        (**self).encode(element)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        T::decode(element, ctx).map(Box::new)
    }
}
