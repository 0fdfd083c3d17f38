//! Shared encode/decode machinery for the jitmeet extensions.
//!
//! Every extension has the same shape on the wire:
//!
//! ```xml
//! <roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus'
//!             jid='room@muc.example'
//!             actor='room@muc.example/alice'>true</roomStatus>
//! ```
//!
//! a fixed namespace and element name, a handful of optional attributes and
//! a single text body. The variants only differ in their
//! [`ExtensionDescriptor`] and in how body text is interpreted, so the scan
//! loop lives here once and each variant plugs in a [`StanzaExtension`] impl.

use std::borrow::Cow;
use std::fmt;

use jid::Jid;
use minidom::Element;
use tracing::{debug, trace, warn};

use crate::builder::{check_xml_chars, ElementFragmentBuilder, FragmentBuilder, XmlFragmentBuilder};
use crate::cursor::{parse_element, ElementCursor, XmlCursor, XmlEvent};
use crate::{ns, ExtensionError};

/// Attributes an extension may carry on its opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionAttribute {
    /// `jid`: the participant or room the request is about
    Jid,
    /// `actor`: the peer that initiated the request
    Actor,
    /// `withMe`: boolean flag, participant identity only
    WithMe,
}

impl ExtensionAttribute {
    /// Attribute name on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jid => ns::attr::JID,
            Self::Actor => ns::attr::ACTOR,
            Self::WithMe => ns::attr::WITH_ME,
        }
    }
}

/// Static identity and schema of one extension variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    /// Namespace of the element
    pub namespace: &'static str,
    /// Element name
    pub element: &'static str,
    /// Recognised attributes, in emission order
    pub attributes: &'static [ExtensionAttribute],
    /// Body text that turns the element into a "report current value" request
    pub escape_token: Option<&'static str>,
    /// Log a warning when an element arrives with an empty body
    pub warn_on_empty_body: bool,
}

impl ExtensionDescriptor {
    /// Whether `(namespace, element)` is this extension's identity.
    pub fn matches(&self, namespace: &str, element: &str) -> bool {
        self.namespace == namespace && self.element == element
    }

    /// Whether `text` is this extension's request token.
    pub fn is_escape_token(&self, text: &str) -> bool {
        self.escape_token == Some(text)
    }
}

/// Optional attributes of an extension element.
///
/// Only the attributes listed in a variant's descriptor are read from or
/// written to the wire; the others stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionAttributes {
    /// MUC JID of the participant (`room@muc.server/nick`) or the room
    pub jid: Option<Jid>,
    /// JID of the peer that initiated the request
    pub actor: Option<Jid>,
    /// Translation with the moderator included
    pub with_me: Option<bool>,
}

impl ExtensionAttributes {
    /// Read the attributes in `schema` from the cursor's current start tag.
    ///
    /// A JID that fails to parse aborts the whole decode.
    pub fn read<C: XmlCursor + ?Sized>(
        cursor: &C,
        schema: &[ExtensionAttribute],
    ) -> Result<Self, ExtensionError> {
        let mut attributes = Self::default();

        for attribute in schema {
            let Some(value) = cursor.attribute(attribute.name()) else {
                continue;
            };

            match attribute {
                ExtensionAttribute::Jid => attributes.jid = Some(parse_jid(*attribute, value)?),
                ExtensionAttribute::Actor => {
                    attributes.actor = Some(parse_jid(*attribute, value)?)
                }
                ExtensionAttribute::WithMe => attributes.with_me = Some(parse_lenient_bool(value)),
            }
        }

        Ok(attributes)
    }

    /// Append the present attributes in `schema` order.
    pub fn write<B: FragmentBuilder + ?Sized>(&self, builder: &mut B, schema: &[ExtensionAttribute]) {
        for attribute in schema {
            match attribute {
                ExtensionAttribute::Jid => {
                    if let Some(ref jid) = self.jid {
                        builder.attribute(attribute.name(), &jid.to_string());
                    }
                }
                ExtensionAttribute::Actor => {
                    if let Some(ref actor) = self.actor {
                        builder.attribute(attribute.name(), &actor.to_string());
                    }
                }
                ExtensionAttribute::WithMe => {
                    if let Some(with_me) = self.with_me {
                        builder.attribute(attribute.name(), bool_text(with_me));
                    }
                }
            }
        }
    }
}

fn parse_jid(attribute: ExtensionAttribute, value: &str) -> Result<Jid, ExtensionError> {
    value
        .parse::<Jid>()
        .map_err(|e| ExtensionError::malformed_jid(attribute.name(), value, e))
}

/// Boolean parse used for bodies and the `withMe` attribute.
///
/// `"true"` in any letter case is true, everything else is false. Text is
/// not trimmed. Anything other than `true`/`false` is logged.
pub fn parse_lenient_bool(text: &str) -> bool {
    if text.eq_ignore_ascii_case("true") {
        true
    } else {
        if !text.eq_ignore_ascii_case("false") {
            warn!(text = %text, "Unparseable boolean, falling back to false");
        }
        false
    }
}

pub(crate) fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Body of the status extensions: either a value or a request for the
/// current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBody<T> {
    /// The escape token was received: report the current value.
    Check,
    /// A concrete status value.
    Value(T),
}

impl<T> StatusBody<T> {
    /// Interpret body text, giving the descriptor's escape token precedence
    /// over `parse`.
    pub fn interpret(
        descriptor: &ExtensionDescriptor,
        text: &str,
        parse: impl FnOnce(&str) -> T,
    ) -> Self {
        if descriptor.is_escape_token(text) {
            Self::Check
        } else {
            Self::Value(parse(text))
        }
    }

    /// The value, unless this is a check request.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Check => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Whether this is a check request.
    pub fn is_check(&self) -> bool {
        matches!(self, Self::Check)
    }
}

/// A typed jitmeet extension.
///
/// Implementors describe their identity and body semantics; decoding and
/// encoding are provided.
pub trait StanzaExtension: Sized {
    /// Wire identity and attribute schema.
    const DESCRIPTOR: ExtensionDescriptor;

    /// Typed body carried as element text.
    type Body: Clone + PartialEq + fmt::Debug;

    /// Interpret one non-empty text event. Never fails: unparseable text
    /// degrades to the variant's fallback value.
    fn interpret_text(text: &str) -> Self::Body;

    /// Canonical text form of the body.
    fn body_text(body: &Self::Body) -> Cow<'_, str>;

    /// Assemble a value from decoded parts.
    fn from_parts(attributes: ExtensionAttributes, body: Option<Self::Body>) -> Self;

    /// Tag attributes of this value.
    fn attributes(&self) -> &ExtensionAttributes;

    /// Body of this value, `None` if the element arrived without text.
    fn body(&self) -> Option<&Self::Body>;

    /// Decode from a cursor positioned on a start tag.
    ///
    /// Returns `Ok(None)` when the namespace or element name is not this
    /// extension's.
    fn decode<C: XmlCursor + ?Sized>(cursor: &mut C) -> Result<Option<Self>, ExtensionError> {
        decode_extension(cursor)
    }

    /// Append this value to `builder`.
    fn encode<B: FragmentBuilder + ?Sized>(&self, builder: &mut B) -> Result<(), ExtensionError> {
        encode_extension(self, builder)
    }

    /// Decode from a parsed element.
    fn from_element(element: &Element) -> Result<Option<Self>, ExtensionError> {
        let mut cursor = ElementCursor::new(element);
        Self::decode(&mut cursor)
    }

    /// Decode from a raw XML fragment that declares its namespace.
    fn from_xml(xml: &str) -> Result<Option<Self>, ExtensionError> {
        let element = parse_element(xml)?;
        Self::from_element(&element)
    }

    /// Serialize to the bare fragment (no `xmlns`).
    fn to_xml(&self) -> Result<String, ExtensionError> {
        let mut builder = XmlFragmentBuilder::new(Self::DESCRIPTOR.element);
        self.encode(&mut builder)?;
        let xml = builder.finish();
        debug!(element = Self::DESCRIPTOR.element, xml = %xml, "Built extension fragment");
        Ok(xml)
    }

    /// Serialize to a namespaced element for use as an IQ payload.
    fn to_element(&self) -> Result<Element, ExtensionError> {
        let mut builder =
            ElementFragmentBuilder::new(Self::DESCRIPTOR.namespace, Self::DESCRIPTOR.element);
        self.encode(&mut builder)?;
        Ok(builder.finish())
    }
}

/// Shared scan loop behind [`StanzaExtension::decode`].
///
/// Adjacent text events are joined into one run, so a body split by the
/// parser (entity references, buffer boundaries) is interpreted whole. Every
/// non-empty run before the closing tag, nested ones included, is handed to
/// `interpret_text`; the last one wins. Nested elements are skipped by
/// depth, so a nested element with the same name cannot end the scan early.
pub fn decode_extension<T, C>(cursor: &mut C) -> Result<Option<T>, ExtensionError>
where
    T: StanzaExtension,
    C: XmlCursor + ?Sized,
{
    let descriptor = &T::DESCRIPTOR;

    if cursor.namespace() != descriptor.namespace {
        return Ok(None);
    }

    if cursor.name() != descriptor.element {
        trace!(
            namespace = descriptor.namespace,
            element = %cursor.name(),
            "Unknown element under extension namespace"
        );
        return Ok(None);
    }

    let attributes = ExtensionAttributes::read(&*cursor, descriptor.attributes)?;
    let mut body = None;
    let mut run = String::new();
    let mut depth = 0usize;

    loop {
        let event = cursor
            .next_event()?
            .ok_or_else(|| ExtensionError::truncated(descriptor.element))?;

        match event {
            XmlEvent::Text(text) => {
                run.push_str(&text);
                continue;
            }
            XmlEvent::Other => continue,
            XmlEvent::StartTag(_) | XmlEvent::EndTag(_) => {
                if !run.is_empty() {
                    body = Some(T::interpret_text(&run));
                    run.clear();
                }
            }
        }

        match event {
            XmlEvent::StartTag(name) => {
                depth += 1;
                trace!(element = descriptor.element, nested = %name, "Skipping nested element");
            }
            XmlEvent::EndTag(name) => {
                if depth == 0 {
                    if name == descriptor.element {
                        break;
                    }
                    return Err(ExtensionError::xml_parse(format!(
                        "Unexpected </{}> inside <{}>",
                        name, descriptor.element
                    )));
                }
                depth -= 1;
            }
            XmlEvent::Text(_) | XmlEvent::Other => {}
        }
    }

    if body.is_none() && descriptor.warn_on_empty_body {
        warn!(element = descriptor.element, "Received extension without value");
    }

    debug!(
        namespace = descriptor.namespace,
        element = descriptor.element,
        has_body = body.is_some(),
        "Decoded extension"
    );

    Ok(Some(T::from_parts(attributes, body)))
}

/// Shared encoder behind [`StanzaExtension::encode`].
///
/// Refuses values the wire cannot carry before touching the builder: an
/// unset or empty body (it would decode back as unset) and text holding
/// characters XML has no form for.
pub fn encode_extension<T, B>(extension: &T, builder: &mut B) -> Result<(), ExtensionError>
where
    T: StanzaExtension,
    B: FragmentBuilder + ?Sized,
{
    let descriptor = &T::DESCRIPTOR;
    let text = extension
        .body()
        .map(T::body_text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ExtensionError::incomplete(descriptor.element))?;

    check_xml_chars(descriptor.element, &text)?;
    let attributes = extension.attributes();
    for jid in [&attributes.jid, &attributes.actor].into_iter().flatten() {
        check_xml_chars(descriptor.element, &jid.to_string())?;
    }

    attributes.write(builder, descriptor.attributes);
    builder.close_opening_tag();
    builder.text(&text);
    Ok(())
}
