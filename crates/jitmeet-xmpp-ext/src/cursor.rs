//! Forward-only XML cursor consumed by the decoders.
//!
//! The decoders never see a whole document. They are handed a cursor
//! positioned on the opening tag of a candidate extension and pull events
//! from it until the matching end tag. `ElementCursor` provides this view
//! over an element already parsed by minidom (the payload of an
//! `xmpp_parsers::iq::Iq`), walking the tree lazily.

use minidom::{Element, Node};

use crate::ExtensionError;

/// One event pulled from an [`XmlCursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// Opening tag of a nested element
    StartTag(String),
    /// Closing tag (including the one closing the root)
    EndTag(String),
    /// Character data
    Text(String),
    /// Anything else (comments, processing instructions)
    Other,
}

/// Streaming view of an XML element, positioned at a start tag.
pub trait XmlCursor {
    /// Namespace of the current start tag.
    fn namespace(&self) -> &str;

    /// Local name of the current start tag.
    fn name(&self) -> &str;

    /// Value of an unprefixed attribute on the current start tag.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Advance to the next event. `Ok(None)` means the input is exhausted.
    fn next_event(&mut self) -> Result<Option<XmlEvent>, ExtensionError>;
}

struct Frame<'a> {
    element: &'a Element,
    nodes: Box<dyn Iterator<Item = &'a Node> + 'a>,
}

/// Cursor over a parsed minidom element.
///
/// Nesting is tracked with an explicit stack, so every `StartTag` is paired
/// with exactly one `EndTag` and the root's `EndTag` is the last event.
pub struct ElementCursor<'a> {
    current: &'a Element,
    current_ns: String,
    stack: Vec<Frame<'a>>,
}

impl<'a> ElementCursor<'a> {
    /// Create a cursor positioned on the opening tag of `element`.
    pub fn new(element: &'a Element) -> Self {
        Self {
            current: element,
            current_ns: String::from(element.ns()),
            stack: vec![Frame {
                element,
                nodes: Box::new(element.nodes()),
            }],
        }
    }

    /// Current nesting depth; 1 while inside the root, 0 once it is closed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl XmlCursor for ElementCursor<'_> {
    fn namespace(&self) -> &str {
        &self.current_ns
    }

    fn name(&self) -> &str {
        self.current.name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.current.attr(name)
    }

    fn next_event(&mut self) -> Result<Option<XmlEvent>, ExtensionError> {
        let Some(frame) = self.stack.last_mut() else {
            return Ok(None);
        };

        match frame.nodes.next() {
            Some(node) => {
                if let Some(child) = node.as_element() {
                    self.current = child;
                    self.current_ns = String::from(child.ns());
                    self.stack.push(Frame {
                        element: child,
                        nodes: Box::new(child.nodes()),
                    });
                    Ok(Some(XmlEvent::StartTag(child.name().to_string())))
                } else if let Some(text) = node.as_text() {
                    Ok(Some(XmlEvent::Text(text.to_string())))
                } else {
                    Ok(Some(XmlEvent::Other))
                }
            }
            None => {
                let name = frame.element.name().to_string();
                self.stack.pop();
                Ok(Some(XmlEvent::EndTag(name)))
            }
        }
    }
}

/// Parse a standalone XML fragment into a minidom element.
///
/// The fragment must declare its own namespace (`xmlns='…'`), as minidom
/// requires.
pub fn parse_element(xml: &str) -> Result<Element, ExtensionError> {
    xml.parse::<Element>()
        .map_err(|e| ExtensionError::xml_parse(format!("Failed to parse element: {}", e)))
}
