//! Outbound fragment builders.
//!
//! Encoders only decide *what* to append and in which order; escaping and
//! the final shape of the output belong to the builder.

use minidom::Element;

use crate::ExtensionError;

/// Sink for one extension element: attributes, then the body text.
pub trait FragmentBuilder {
    /// Append `name="value"` to the opening tag.
    fn attribute(&mut self, name: &'static str, value: &str);

    /// Close the opening tag. Attributes appended afterwards are ignored.
    fn close_opening_tag(&mut self);

    /// Append character data after the opening tag.
    fn text(&mut self, text: &str);
}

/// Builds the bare XML fragment of an extension, e.g.
/// `<stream jid="room@muc.example/bob">false</stream>`.
///
/// No `xmlns` is written; the enclosing stanza carries the namespace.
#[derive(Debug, Clone)]
pub struct XmlFragmentBuilder {
    element: &'static str,
    buf: String,
    opening_closed: bool,
}

impl XmlFragmentBuilder {
    /// Start a fragment for `element`.
    pub fn new(element: &'static str) -> Self {
        let mut buf = String::with_capacity(64);
        buf.push('<');
        buf.push_str(element);
        Self {
            element,
            buf,
            opening_closed: false,
        }
    }

    /// Finish the fragment, self-closing it if no body was written.
    pub fn finish(mut self) -> String {
        if self.opening_closed {
            self.buf.push_str("</");
            self.buf.push_str(self.element);
            self.buf.push('>');
        } else {
            self.buf.push_str("/>");
        }
        self.buf
    }
}

impl FragmentBuilder for XmlFragmentBuilder {
    fn attribute(&mut self, name: &'static str, value: &str) {
        if self.opening_closed {
            return;
        }
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        escape_into(&mut self.buf, value, true);
        self.buf.push('"');
    }

    fn close_opening_tag(&mut self) {
        if !self.opening_closed {
            self.buf.push('>');
            self.opening_closed = true;
        }
    }

    fn text(&mut self, text: &str) {
        self.close_opening_tag();
        escape_into(&mut self.buf, text, false);
    }
}

/// Builds a namespaced minidom element, ready to be used as an IQ payload.
#[derive(Debug, Clone)]
pub struct ElementFragmentBuilder {
    namespace: &'static str,
    element: &'static str,
    attributes: Vec<(&'static str, String)>,
    text: String,
    opening_closed: bool,
}

impl ElementFragmentBuilder {
    /// Start an element `element` in `namespace`.
    pub fn new(namespace: &'static str, element: &'static str) -> Self {
        Self {
            namespace,
            element,
            attributes: Vec::new(),
            text: String::new(),
            opening_closed: false,
        }
    }

    /// Build the element. minidom escapes on serialization.
    pub fn finish(self) -> Element {
        let mut builder = Element::builder(self.element, self.namespace);
        for (name, value) in self.attributes {
            builder = builder.attr(name, value);
        }
        if !self.text.is_empty() {
            builder = builder.append(self.text);
        }
        builder.build()
    }
}

impl FragmentBuilder for ElementFragmentBuilder {
    fn attribute(&mut self, name: &'static str, value: &str) {
        if !self.opening_closed {
            self.attributes.push((name, value.to_string()));
        }
    }

    fn close_opening_tag(&mut self) {
        self.opening_closed = true;
    }

    fn text(&mut self, text: &str) {
        self.opening_closed = true;
        self.text.push_str(text);
    }
}

/// Check that `text` only holds characters XML 1.0 can carry.
///
/// Control characters other than tab, line feed and carriage return (and
/// U+FFFE/U+FFFF) have no escaped form, so they are rejected instead.
pub fn check_xml_chars(element: &'static str, text: &str) -> Result<(), ExtensionError> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(ExtensionError::invalid_character(element, c)),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Escape XML special characters. Quotes, tabs and line feeds are only
/// escaped in attribute values; carriage returns always, so end-of-line
/// normalization on the reading side leaves them intact.
fn escape_into(buf: &mut String, raw: &str, attribute: bool) {
    for c in raw.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '\r' => buf.push_str("&#xD;"),
            '"' if attribute => buf.push_str("&quot;"),
            '\'' if attribute => buf.push_str("&apos;"),
            '\t' if attribute => buf.push_str("&#x9;"),
            '\n' if attribute => buf.push_str("&#xA;"),
            _ => buf.push(c),
        }
    }
}
