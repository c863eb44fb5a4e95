//! Parse XML text into an element tree.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{Element, Error, Result};

/// Parse XML from a buffered reader into its root element.
///
/// The reader does no namespace processing and never loads a DTD: a
/// DOCTYPE is skipped like comments and processing instructions. Text runs
/// made only of whitespace are dropped so that element-only containers have
/// no text payload.
pub(crate) fn parse_root<R: BufRead>(input: R) -> Result<Element> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| Error::Xml(format!("XML parse error at byte {}: {}", reader.buffer_position(), e)))?;

        match event {
            Event::Start(e) => {
                let elem = start_element(&e)?;
                ensure_single_root(&root, &stack)?;
                stack.push(elem);
            }
            Event::Empty(e) => {
                let elem = start_element(&e)?;
                ensure_single_root(&root, &stack)?;
                attach(elem, &mut stack, &mut root);
            }
            Event::End(_) => {
                // End tag names are checked by the reader.
                if let Some(elem) = stack.pop() {
                    attach(elem, &mut stack, &mut root);
                }
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                if !text.trim().is_empty() {
                    match stack.last_mut() {
                        Some(elem) => elem.append_text(&text),
                        None => {
                            return Err(Error::Xml(format!(
                                "text outside of the root element at byte {}",
                                reader.buffer_position()
                            )))
                        }
                    }
                }
            }
            Event::CData(e) => {
                let text = std::str::from_utf8(&e)?;
                match stack.last_mut() {
                    Some(elem) => elem.append_text(text),
                    None => {
                        return Err(Error::Xml(
                            "CDATA section outside of the root element".to_string(),
                        ))
                    }
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and DOCTYPE
            _ => {}
        }

        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(Error::Xml(format!("unclosed element <{}>", open.tag())));
    }

    root.ok_or(Error::NoRoot)
}

fn start_element(e: &BytesStart<'_>) -> Result<Element> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref())?;
    let mut elem = Element::new(tag);

    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Xml(e.to_string()))?
            .into_owned();
        elem.push_attribute(key, value);
    }

    Ok(elem)
}

fn ensure_single_root(root: &Option<Element>, stack: &[Element]) -> Result<()> {
    if stack.is_empty() {
        if let Some(existing) = root {
            return Err(Error::Xml(format!(
                "more than one root element (first was <{}>)",
                existing.tag()
            )));
        }
    }
    Ok(())
}

fn attach(elem: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_child(elem);
        }
        None => *root = Some(elem),
    }
}
