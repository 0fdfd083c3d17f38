//! Stream on/off control (`stream`).
//!
//! ```xml
//! <stream xmlns='http://jitsi.org/jitmeet/stream' jid='room@muc.example/bob'>false</stream>
//! ```

use std::borrow::Cow;

use jid::Jid;

use crate::extension::{
    bool_text, parse_lenient_bool, ExtensionAttribute, ExtensionAttributes, ExtensionDescriptor,
    StanzaExtension,
};
use crate::ns;

/// Stream control extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamControl {
    attributes: ExtensionAttributes,
    stream: Option<bool>,
}

impl StreamControl {
    /// Turn the participant's stream on (`true`) or off (`false`).
    pub fn new(stream: bool) -> Self {
        Self {
            attributes: ExtensionAttributes::default(),
            stream: Some(stream),
        }
    }

    /// Set the MUC JID of the participant whose stream is toggled.
    pub fn with_jid(mut self, jid: Jid) -> Self {
        self.attributes.jid = Some(jid);
        self
    }

    /// Set the peer that initiated the toggle.
    pub fn with_actor(mut self, actor: Jid) -> Self {
        self.attributes.actor = Some(actor);
        self
    }

    pub fn jid(&self) -> Option<&Jid> {
        self.attributes.jid.as_ref()
    }

    pub fn actor(&self) -> Option<&Jid> {
        self.attributes.actor.as_ref()
    }

    pub fn stream(&self) -> Option<bool> {
        self.stream
    }
}

impl StanzaExtension for StreamControl {
    const DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
        namespace: ns::STREAM,
        element: ns::element::STREAM,
        attributes: &[ExtensionAttribute::Jid, ExtensionAttribute::Actor],
        escape_token: None,
        warn_on_empty_body: false,
    };

    type Body = bool;

    fn interpret_text(text: &str) -> bool {
        parse_lenient_bool(text)
    }

    fn body_text(body: &bool) -> Cow<'_, str> {
        Cow::Borrowed(bool_text(*body))
    }

    fn from_parts(attributes: ExtensionAttributes, body: Option<bool>) -> Self {
        Self {
            attributes,
            stream: body,
        }
    }

    fn attributes(&self) -> &ExtensionAttributes {
        &self.attributes
    }

    fn body(&self) -> Option<&bool> {
        self.stream.as_ref()
    }
}
