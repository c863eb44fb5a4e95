//! Generic XML document tree used by the simplexml codec.
//!
//! This crate owns the text side of the format: parsing bytes into an
//! [`Element`] tree, writing a tree back out in a fixed, deterministic
//! layout, and selecting child elements by tag name.
//!
//! # Example
//!
//! ```
//! use simplexml_dom::{Document, Element, Selector, WriterConfig};
//!
//! let doc = Document::new(
//!     Element::new("Address")
//!         .with_child(Element::new("Street").with_text("221B Baker Street"))
//!         .with_child(Element::new("City").with_text("London")),
//! );
//!
//! let xml = doc.to_xml_string(&WriterConfig::default())?;
//! assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\r\n"));
//!
//! let parsed = Document::parse_str(&xml)?;
//! let city = parsed.root().query(&Selector::Tag("City"));
//! assert_eq!(city[0].text(), Some("London"));
//! # Ok::<(), simplexml_dom::Error>(())
//! ```
//!
//! # Format
//!
//! - Declaration `<?xml version="1.0" encoding="UTF-8" standalone="no"?>`
//! - One element per line, indented two spaces per level
//! - CRLF line endings
//! - Childless elements with text are written inline, empty ones self-close
//!
//! Whitespace-only text is discarded when parsing, so indentation never
//! shows up as element content.

mod document;
mod element;
mod error;
mod parser;
mod query;
mod writer;

pub use document::Document;
pub use element::Element;
pub use error::{Error, Result};
pub use query::{is_xml_name, Selector};
pub use writer::{LineEnding, WriterConfig};
