//! Maps, written as alternating key and value elements.
//!
//! ```xml
//! <HashMap>
//!   <String>Holmes</String>
//!   <i32>60</i32>
//!   <String>Watson</String>
//!   <i32>55</i32>
//! </HashMap>
//! ```
//!
//! On decode the direct children tagged with the key or value type name are
//! taken in document order and consumed two at a time. How entries that do
//! not pair up are handled is set by [`MapPairing`].

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use simplexml_dom::{Element, Selector};
use tracing::{debug, trace};

use crate::{DecodeContext, Error, MapPairing, Result, ShapeKind, XmlType};

/// Append a key element and a value element per entry to `parent`.
///
/// Entries whose key or value is absent are skipped entirely.
pub fn encode_entries<'a, K, V>(
    parent: &mut Element,
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> Result<()>
where
    K: XmlType + 'a,
    V: XmlType + 'a,
{
    for (key, value) in entries {
        if key.is_absent() || value.is_absent() {
            trace!(parent = parent.tag(), "skipping map entry with absent key or value");
            continue;
        }
        key.encode(parent.push_child(Element::new(key.runtime_name())))?;
        value.encode(parent.push_child(Element::new(value.runtime_name())))?;
    }
    Ok(())
}

/// Decode the key/value pairs held by `parent`.
pub fn decode_entries<K, V, M>(parent: &Element, ctx: &DecodeContext<'_>) -> Result<M>
where
    K: XmlType,
    V: XmlType,
    M: FromIterator<(K, V)>,
{
    let strict = ctx.config().map_pairing == MapPairing::Strict;
    let entries = parent.query(&Selector::Either(K::TYPE_NAME, V::TYPE_NAME));

    if entries.len() % 2 != 0 {
        if strict {
            return Err(Error::MapPairing {
                tag: parent.tag().to_string(),
                reason: format!("{} entry elements cannot form key/value pairs", entries.len()),
            });
        }
        debug!(
            parent = parent.tag(),
            count = entries.len(),
            "odd number of map entry elements, decoding an empty map"
        );
        return Ok(std::iter::empty::<(K, V)>().collect());
    }

    let mut pairs = Vec::with_capacity(entries.len() / 2);
    for pair in entries.chunks_exact(2) {
        let (key, value) = (pair[0], pair[1]);
        if key.tag() != K::TYPE_NAME || value.tag() != V::TYPE_NAME {
            if strict {
                return Err(Error::MapPairing {
                    tag: parent.tag().to_string(),
                    reason: format!(
                        "expected <{}> then <{}>, found <{}> then <{}>",
                        K::TYPE_NAME,
                        V::TYPE_NAME,
                        key.tag(),
                        value.tag()
                    ),
                });
            }
            debug!(parent = parent.tag(), key = key.tag(), value = value.tag(), "skipping mismatched pair");
            continue;
        }
        pairs.push((K::decode(key, ctx)?, V::decode(value, ctx)?));
    }
    Ok(pairs.into_iter().collect())
}

/// Entries are written in the map's iteration order.
impl<K, V, S> XmlType for HashMap<K, V, S>
where
    K: XmlType + Eq + Hash,
    V: XmlType,
    S: BuildHasher + Default,
{
    const TYPE_NAME: &'static str = "HashMap";
    const SHAPE: ShapeKind = ShapeKind::Map;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_entries(element, self)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        decode_entries(element, ctx)
    }
}

impl<K: XmlType + Ord, V: XmlType> XmlType for BTreeMap<K, V> {
    const TYPE_NAME: &'static str = "BTreeMap";
    const SHAPE: ShapeKind = ShapeKind::Map;

    fn encode(&self, element: &mut Element) -> Result<()> {
        encode_entries(element, self)
    }

    fn decode(element: &Element, ctx: &DecodeContext<'_>) -> Result<Self> {
        decode_entries(element, ctx)
    }
}
