//! Shape classification and type/field descriptors.

use crate::XmlType;

/// How a type is laid out in the element tree.
///
/// Every [`XmlType`] declares exactly one shape, so classification is total
/// and decided at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShapeKind {
    /// Single text payload: numbers, booleans, characters, strings, paths,
    /// instants and enumerations.
    Scalar,
    /// Named fields, one child element per field.
    Object,
    /// Fixed-length homogeneous array.
    Sequence,
    /// Growable homogeneous container.
    Collection,
    /// Key/value container, written as adjacent key and value elements.
    Map,
}

impl ShapeKind {
    /// Get the string name for this shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::Object => "Object",
            Self::Sequence => "Sequence",
            Self::Collection => "Collection",
            Self::Map => "Map",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a type.
#[inline]
pub fn shape_of<T: XmlType>() -> ShapeKind {
    T::SHAPE
}

/// Static name and shape of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeDescriptor {
    /// Simple type name, used as the element tag when decoding.
    pub name: &'static str,
    /// Shape of the type.
    pub shape: ShapeKind,
}

impl TypeDescriptor {
    /// Describe a type.
    pub const fn of<T: XmlType>() -> Self {
        Self {
            name: T::TYPE_NAME,
            shape: T::SHAPE,
        }
    }
}

/// A declared field of an object type.
///
/// Descriptors are generated by `#[derive(XmlObject)]` in declaration order,
/// which is also the order of the child elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    /// Field name as declared.
    pub name: &'static str,
    /// Element tag for the field.
    pub tag: &'static str,
    /// Declared type, or `None` for a non-persistent field.
    pub declared: Option<TypeDescriptor>,
}

impl FieldDescriptor {
    /// Describe a persistent field of type `T`.
    pub const fn persistent<T: XmlType>(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            declared: Some(TypeDescriptor::of::<T>()),
        }
    }

    /// Describe a non-persistent field.
    pub const fn skipped(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            declared: None,
        }
    }

    /// Check if the field takes part in encoding and decoding.
    #[inline]
    pub fn is_persistent(&self) -> bool {
        self.declared.is_some()
    }
}
