//! Deterministic, indented XML output.

use std::io::Write;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::{Element, Error, Result};

/// Line terminator written after the declaration and after every element line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    /// `\r\n`
    #[default]
    CrLf,
    /// `\n`
    Lf,
}

impl LineEnding {
    /// The bytes of this line ending.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Output formatting options.
///
/// The defaults produce the canonical document format: 2-space indentation
/// and CRLF line endings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WriterConfig {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Line terminator.
    pub line_ending: LineEnding,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            line_ending: LineEnding::CrLf,
        }
    }
}

impl WriterConfig {
    /// Set the indentation width.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line ending.
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Write a complete document (declaration plus tree) to `output`.
pub(crate) fn write_document<W: Write>(root: &Element, output: W, config: &WriterConfig) -> Result<()> {
    let mut writer = Writer::new(output);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))))
        .map_err(|e| Error::Xml(e.to_string()))?;
    writer
        .get_mut()
        .write_all(config.line_ending.as_str().as_bytes())?;

    write_element(&mut writer, root, 0, config)?;
    writer.get_mut().flush()?;

    Ok(())
}

/// Write a single element and its children, one element per line.
fn write_element<W: Write>(
    writer: &mut Writer<W>,
    elem: &Element,
    depth: usize,
    config: &WriterConfig,
) -> Result<()> {
    write_indent(writer, depth, config)?;

    let mut start = BytesStart::new(elem.tag());
    for (key, value) in elem.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let text = elem.text().filter(|text| !text.is_empty());

    if !elem.has_children() {
        match text {
            Some(text) => {
                writer
                    .write_event(Event::Start(start))
                    .map_err(|e| Error::Xml(e.to_string()))?;
                write_text(writer, text)?;
                writer
                    .write_event(Event::End(BytesEnd::new(elem.tag())))
                    .map_err(|e| Error::Xml(e.to_string()))?;
            }
            None => {
                // Self-closing element
                writer
                    .write_event(Event::Empty(start))
                    .map_err(|e| Error::Xml(e.to_string()))?;
            }
        }
        writer
            .get_mut()
            .write_all(config.line_ending.as_str().as_bytes())?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| Error::Xml(e.to_string()))?;
    if let Some(text) = text {
        write_text(writer, text)?;
    }
    writer
        .get_mut()
        .write_all(config.line_ending.as_str().as_bytes())?;

    for child in elem.children() {
        write_element(writer, child, depth + 1, config)?;
    }

    write_indent(writer, depth, config)?;
    writer
        .write_event(Event::End(BytesEnd::new(elem.tag())))
        .map_err(|e| Error::Xml(e.to_string()))?;
    writer
        .get_mut()
        .write_all(config.line_ending.as_str().as_bytes())?;

    Ok(())
}

fn write_text<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    // Quotes are left alone in text content; only markup characters are escaped.
    writer
        .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
        .map_err(|e| Error::Xml(e.to_string()))
}

fn write_indent<W: Write>(writer: &mut Writer<W>, depth: usize, config: &WriterConfig) -> Result<()> {
    let width = depth * config.indent;
    if width > 0 {
        write!(writer.get_mut(), "{:width$}", "", width = width)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(root: &Element, config: &WriterConfig) -> String {
        let mut out = Vec::new();
        write_document(root, &mut out, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_nested_crlf() {
        let root = Element::new("Person")
            .with_child(Element::new("FirstName").with_text("Sherlock"))
            .with_child(
                Element::new("Address")
                    .with_child(Element::new("Street").with_text("221B Baker Street"))
                    .with_child(Element::new("City").with_text("London")),
            );

        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\r\n\
                        <Person>\r\n\
                        \x20\x20<FirstName>Sherlock</FirstName>\r\n\
                        \x20\x20<Address>\r\n\
                        \x20\x20\x20\x20<Street>221B Baker Street</Street>\r\n\
                        \x20\x20\x20\x20<City>London</City>\r\n\
                        \x20\x20</Address>\r\n\
                        </Person>\r\n";

        assert_eq!(render(&root, &WriterConfig::default()), expected);
    }

    #[test]
    fn test_write_empty_elements_self_close() {
        let root = Element::new("Person")
            .with_child(Element::new("LastName").with_text(""))
            .with_child(Element::new("Books"));

        let out = render(&root, &WriterConfig::default().line_ending(LineEnding::Lf));
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n<Person>\n  <LastName/>\n  <Books/>\n</Person>\n"
        );
    }

    #[test]
    fn test_write_escapes_markup_only() {
        let root = Element::new("Title").with_text("Holmes & \"Watson\" <1887>");
        let out = render(&root, &WriterConfig::default().line_ending(LineEnding::Lf));
        assert!(out.contains("<Title>Holmes &amp; \"Watson\" &lt;1887&gt;</Title>"));
    }

    #[test]
    fn test_write_custom_indent() {
        let root = Element::new("A").with_child(Element::new("B").with_text("1"));
        let out = render(&root, &WriterConfig::default().indent(4).line_ending(LineEnding::Lf));
        assert!(out.contains("\n    <B>1</B>\n"));
    }

    #[test]
    fn test_write_is_deterministic() {
        let root = Element::new("Books")
            .with_child(Element::new("Book").with_child(Element::new("Title").with_text("A")))
            .with_child(Element::new("Book").with_child(Element::new("Title").with_text("B")));

        let config = WriterConfig::default();
        assert_eq!(render(&root, &config), render(&root, &config));
    }
}
