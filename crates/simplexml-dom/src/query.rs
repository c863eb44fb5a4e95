//! Child selection by tag name.
//!
//! Only the two selector forms the codec needs are supported: a single tag
//! name, and an alternation of two tag names. Both select direct children.

use crate::{Error, Result};

/// Selects direct child elements by tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Children whose tag equals the name.
    Tag(&'a str),
    /// Children whose tag equals either name.
    Either(&'a str, &'a str),
}

impl<'a> Selector<'a> {
    /// Check whether a tag name is selected.
    #[inline]
    pub fn matches(&self, tag: &str) -> bool {
        match *self {
            Selector::Tag(name) => tag == name,
            Selector::Either(first, second) => tag == first || tag == second,
        }
    }

    /// Parse a selector expression.
    ///
    /// Accepted forms:
    ///
    /// - `Book`
    /// - `String | i32`
    /// - `*[name()='String' or name()='i32']`
    pub fn parse(expr: &'a str) -> Result<Self> {
        let trimmed = expr.trim();

        if let Some(inner) = trimmed
            .strip_prefix("*[")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return parse_name_predicate(inner).ok_or_else(|| Error::InvalidSelector(expr.to_string()));
        }

        if let Some((first, second)) = trimmed.split_once('|') {
            let (first, second) = (first.trim(), second.trim());
            if is_xml_name(first) && is_xml_name(second) {
                return Ok(Selector::Either(first, second));
            }
            return Err(Error::InvalidSelector(expr.to_string()));
        }

        if is_xml_name(trimmed) {
            Ok(Selector::Tag(trimmed))
        } else {
            Err(Error::InvalidSelector(expr.to_string()))
        }
    }
}

/// Parse `name()='A' or name()='B'` (or a single `name()='A'`).
fn parse_name_predicate(inner: &str) -> Option<Selector<'_>> {
    match inner.split_once(" or ") {
        Some((first, second)) => Some(Selector::Either(
            parse_name_test(first)?,
            parse_name_test(second)?,
        )),
        None => parse_name_test(inner).map(Selector::Tag),
    }
}

/// Parse `name()='A'`, with either quote style and optional spaces.
fn parse_name_test(test: &str) -> Option<&str> {
    let rest = test.trim().strip_prefix("name()")?.trim_start();
    let literal = rest.strip_prefix('=')?.trim();

    let unquoted = literal
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| literal.strip_prefix('"').and_then(|s| s.strip_suffix('"')))?;

    is_xml_name(unquoted).then_some(unquoted)
}

/// Check that a string is usable as an XML element name.
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}
