//! Element tree.
//!
//! A document is an ordered tree of elements. Every element has a tag name,
//! zero or more child elements, an optional text payload and, incidentally,
//! the attributes it was parsed with.

use crate::query::Selector;

/// A single element of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    text: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create a new element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the text content of this element.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an attribute to this element.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Add a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Tag name of this element.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Text content, if the element carries any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Text content, or an empty string when the element has none.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Append text, used by the parser when a text run is split by
    /// comments or CDATA sections.
    pub(crate) fn append_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Append a child element and return a mutable reference to it.
    pub fn push_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Whether the element has child elements.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Attributes as key-value pairs in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub(crate) fn push_attribute(&mut self, key: String, value: String) {
        self.attributes.push((key, value));
    }

    /// Attribute value, or an empty string if the attribute is absent.
    pub fn attribute(&self, name: &str) -> &str {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Direct child elements matching `selector`, in document order.
    pub fn query(&self, selector: &Selector<'_>) -> Vec<&Element> {
        self.children
            .iter()
            .filter(|child| selector.matches(child.tag()))
            .collect()
    }

    /// Direct child elements with the given tag name.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// Count the elements in this subtree, including this one.
    pub fn element_count(&self) -> usize {
        1 + self.children.iter().map(Element::element_count).sum::<usize>()
    }
}
