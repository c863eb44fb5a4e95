//! Document-level entry points.

use std::io::{Read, Write};
use std::path::Path;

use simplexml_dom::{Document, Element, WriterConfig};
use tracing::debug;

use crate::{DecodeConfig, DecodeContext, Error, Result, XmlType};

/// Build the document for `value`. The root element is tagged with the
/// value's type name.
pub fn encode_document<T: XmlType>(value: &T) -> Result<Document> {
    if value.is_absent() {
        return Err(Error::AbsentRoot {
            type_name: T::TYPE_NAME,
        });
    }
    let mut root = Element::new(value.runtime_name());
    value.encode(&mut root)?;
    debug!(root = root.tag(), children = root.element_count(), "encoded document");
    Ok(Document::new(root))
}

/// Decode a `T` from a parsed document.
///
/// Fails with [`Error::WrongRoot`] unless the root tag equals `T`'s type name.
pub fn decode_document<T: XmlType>(doc: &Document, config: &DecodeConfig) -> Result<T> {
    let root = doc.root();
    if root.tag() != T::TYPE_NAME {
        return Err(Error::WrongRoot {
            expected: T::TYPE_NAME.to_string(),
            found: root.tag().to_string(),
        });
    }
    debug!(root = root.tag(), "decoding document");
    T::decode(root, &DecodeContext::new(config))
}

/// Write `value` as an XML document to `writer` in the default layout.
pub fn serialize<T: XmlType, W: Write>(writer: W, value: &T) -> Result<()> {
    serialize_with(writer, value, &WriterConfig::default())
}

/// Write `value` as an XML document to `writer` with the given layout.
pub fn serialize_with<T: XmlType, W: Write>(writer: W, value: &T, config: &WriterConfig) -> Result<()> {
    encode_document(value)?
        .write_with(writer, config)
        .map_err(Error::from_write)
}

/// Read a `T` from an XML document.
pub fn deserialize<T: XmlType, R: Read>(reader: R) -> Result<T> {
    deserialize_with(reader, &DecodeConfig::default())
}

/// Read a `T` from an XML document with the given options.
pub fn deserialize_with<T: XmlType, R: Read>(reader: R, config: &DecodeConfig) -> Result<T> {
    let doc = Document::parse(reader).map_err(Error::from_parse)?;
    decode_document(&doc, config)
}

/// Serialize `value` to a string.
pub fn to_string<T: XmlType>(value: &T) -> Result<String> {
    encode_document(value)?
        .to_xml_string(&WriterConfig::default())
        .map_err(Error::from_write)
}

/// Serialize `value` to bytes.
pub fn to_vec<T: XmlType>(value: &T) -> Result<Vec<u8>> {
    encode_document(value)?
        .to_bytes(&WriterConfig::default())
        .map_err(Error::from_write)
}

/// Deserialize a `T` from a string.
pub fn from_str<T: XmlType>(input: &str) -> Result<T> {
    let doc = Document::parse_str(input).map_err(Error::from_parse)?;
    decode_document(&doc, &DecodeConfig::default())
}

/// Deserialize a `T` from bytes.
pub fn from_slice<T: XmlType>(input: &[u8]) -> Result<T> {
    let doc = Document::parse_bytes(input).map_err(Error::from_parse)?;
    decode_document(&doc, &DecodeConfig::default())
}

/// Serialize `value` into the file at `path`, replacing it.
pub fn serialize_file<T: XmlType, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "writing document");
    encode_document(value)?
        .write_file(path, &WriterConfig::default())
        .map_err(Error::from_write)
}

/// Deserialize a `T` from the file at `path`.
pub fn deserialize_file<T: XmlType, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading document");
    let doc = Document::parse_file(path).map_err(Error::from_parse)?;
    decode_document(&doc, &DecodeConfig::default())
}
