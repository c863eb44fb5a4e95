//! Sequences (`[T; N]`, `Box<[T]>`) and collections.
//!
//! Items are written as consecutive child elements of the container's
//! element, each tagged with the item's type name. Decoding collects the
//! direct children tagged with the declared item type name, so children with
//! any other tag are ignored.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use simplexml_dom::{Element, Selector};
use tracing::trace;

use crate::{DecodeContext, Error, Result, ShapeKind, XmlType};

/// Append one child element per item to `parent`, skipping absent items.
pub fn encode_elements<'a, T>(parent: &mut Element, items: impl IntoIterator<Item = &'a T>) -> Result<()>
where
    T: XmlType + 'a,
{
    for item in items {
        if item.is_absent() {
            continue;
        }
        let child = parent.push_child(Element::new(item.runtime_name()));
        item.encode(child)?;
    }
    Ok(())
}

/// Decode every direct child of `parent` tagged with `T`'s type name, in
/// document order.
pub fn decode_elements<T, C>(parent: &Element, ctx: &DecodeContext<'_>) -> Result<C>
where
    T: XmlType,
    C: FromIterator<T>,
{
    let items = parent.query(&Selector::Tag(T::TYPE_NAME));
    trace!(parent = parent.tag(), item = T::TYPE_NAME, count = items.len(), "decoding items");
    items.into_iter().map(|child| T::decode(child, ctx)).collect()
}

impl<T: XmlType> XmlType for Vec<T> {
    const TYPE_NAME: &'static str = "Vec";
    const SHAPE: ShapeKind = ShapeKind::Collection;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_elements(element, self)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        decode_elements(element, ctx)
    }
}

impl<T: XmlType> XmlType for VecDeque<T> {
    const TYPE_NAME: &'static str = "VecDeque";
    const SHAPE: ShapeKind = ShapeKind::Collection;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_elements(element, self)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        decode_elements(element, ctx)
    }
}

impl<T: XmlType> XmlType for LinkedList<T> {
    const TYPE_NAME: &'static str = "LinkedList";
    const SHAPE: ShapeKind = ShapeKind::Collection;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_elements(element, self)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        decode_elements(element, ctx)
    }
}

/// Items are written in the set's iteration order.
impl<T, S> XmlType for HashSet<T, S>
where
    T: XmlType + Eq + Hash,
    S: BuildHasher + Default,
{
    const TYPE_NAME: &'static str = "HashSet";
    const SHAPE: ShapeKind = ShapeKind::Collection;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_elements(element, self)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        decode_elements(element, ctx)
    }
}

impl<T: XmlType + Ord> XmlType for BTreeSet<T> {
    const TYPE_NAME: &'static str = "BTreeSet";
    const SHAPE: ShapeKind = ShapeKind::Collection;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_elements(element, self)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        decode_elements(element, ctx)
    }
}

/// Fixed-length arrays. Decoding fails unless exactly `N` items are found.
impl<T: XmlType, const N: usize> XmlType for [T; N] {
    const TYPE_NAME: &'static str = "Array";
    const SHAPE: ShapeKind = ShapeKind::Sequence;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_elements(element, self)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        let items: Vec<T> = decode_elements(element, ctx)?;
        let found = items.len();
        items.try_into().map_err(|_| Error::Instantiation {
            type_name: Self::TYPE_NAME,
            reason: format!("expected {} items in <{}>, found {}", N, element.tag(), found),
        })
    }
}

/// Boxed slices take however many items are found.
impl<T: XmlType> XmlType for Box<[T]> {
    const TYPE_NAME: &'static str = "Array";
    const SHAPE: ShapeKind = ShapeKind::Sequence;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_elements(element, self.iter())
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        decode_elements(element, ctx)
    }
}
