//! Whole-document parsing and writing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::parser::parse_root;
use crate::writer::{write_document, WriterConfig};
use crate::{Element, Result};

/// An XML document with exactly one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Create a document around a root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse a document from any reader.
    pub fn parse<R: Read>(input: R) -> Result<Self> {
        let root = parse_root(BufReader::new(input))?;
        tracing::debug!(root = root.tag(), elements = root.element_count(), "parsed XML document");
        Ok(Self { root })
    }

    /// Parse a document from bytes.
    pub fn parse_bytes(input: &[u8]) -> Result<Self> {
        let root = parse_root(input)?;
        tracing::debug!(root = root.tag(), elements = root.element_count(), "parsed XML document");
        Ok(Self { root })
    }

    /// Parse a document from a string.
    pub fn parse_str(input: &str) -> Result<Self> {
        Self::parse_bytes(input.as_bytes())
    }

    /// Parse a document from a file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::parse(file)
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Write the document with the default formatting.
    pub fn write<W: Write>(&self, output: W) -> Result<()> {
        self.write_with(output, &WriterConfig::default())
    }

    /// Write the document with explicit formatting options.
    pub fn write_with<W: Write>(&self, output: W, config: &WriterConfig) -> Result<()> {
        write_document(&self.root, output, config)?;
        tracing::debug!(root = self.root.tag(), "wrote XML document");
        Ok(())
    }

    /// Write the document to a file, creating or truncating it.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, config: &WriterConfig) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_with(BufWriter::new(file), config)
    }

    /// Render the document to bytes.
    pub fn to_bytes(&self, config: &WriterConfig) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.write_with(&mut output, config)?;
        Ok(output)
    }

    /// Render the document to a string.
    pub fn to_xml_string(&self, config: &WriterConfig) -> Result<String> {
        let bytes = self.to_bytes(config)?;
        String::from_utf8(bytes).map_err(|e| crate::Error::Utf8(e.utf8_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_write_round_trip() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\r\n\
                   <Books>\r\n\
                   \x20\x20<Book>\r\n\
                   \x20\x20\x20\x20<Title>The Hound of the Baskervilles</Title>\r\n\
                   \x20\x20</Book>\r\n\
                   \x20\x20<Book>\r\n\
                   \x20\x20\x20\x20<Title>The Sign of Four</Title>\r\n\
                   \x20\x20</Book>\r\n\
                   </Books>\r\n";

        let doc = Document::parse_str(xml).unwrap();
        assert_eq!(doc.to_xml_string(&WriterConfig::default()).unwrap(), xml);
    }

    #[test]
    fn test_parse_from_reader() {
        let doc = Document::parse(std::io::Cursor::new(b"<A><B>1</B></A>".to_vec())).unwrap();
        assert_eq!(doc.root().tag(), "A");
        assert_eq!(doc.root().children()[0].text(), Some("1"));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let result = Document::parse_bytes(b"<A>\xff\xfe</A>");
        assert!(matches!(result, Err(Error::Utf8(_)) | Err(Error::Xml(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("simplexml-dom-{}.xml", std::process::id()));
        let doc = Document::new(Element::new("City").with_text("London"));

        doc.write_file(&path, &WriterConfig::default()).unwrap();
        let parsed = Document::parse_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(parsed, doc);
    }
}
