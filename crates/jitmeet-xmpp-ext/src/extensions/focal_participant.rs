//! Focal participant designation (`roomFocalParticipant`).
//!
//! ```xml
//! <roomFocalParticipant xmlns='http://jitsi.org/jitmeet/roomfocalparticipant'
//!                       jid='room@muc.example'>spk-1</roomFocalParticipant>
//! ```

use std::borrow::Cow;

use jid::Jid;

use crate::extension::{ExtensionAttribute, ExtensionAttributes, ExtensionDescriptor, StanzaExtension};
use crate::ns;

/// Focal participant extension. The body is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocalParticipant {
    attributes: ExtensionAttributes,
    focal_participant_id: Option<String>,
}

impl FocalParticipant {
    pub fn new(focal_participant_id: impl Into<String>) -> Self {
        Self {
            attributes: ExtensionAttributes::default(),
            focal_participant_id: Some(focal_participant_id.into()),
        }
    }

    pub fn with_jid(mut self, jid: Jid) -> Self {
        self.attributes.jid = Some(jid);
        self
    }

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

    pub fn focal_participant_id(&self) -> Option<&str> {
        self.focal_participant_id.as_deref()
    }
}

impl StanzaExtension for FocalParticipant {
    const DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
        namespace: ns::ROOM_FOCAL_PARTICIPANT,
        element: ns::element::ROOM_FOCAL_PARTICIPANT,
        attributes: &[ExtensionAttribute::Jid, ExtensionAttribute::Actor],
        escape_token: None,
        warn_on_empty_body: false,
    };

    type Body = String;

    fn interpret_text(text: &str) -> String {
        text.to_string()
    }

    fn body_text(body: &String) -> Cow<'_, str> {
        Cow::Borrowed(body.as_str())
    }

    fn from_parts(attributes: ExtensionAttributes, body: Option<String>) -> Self {
        Self {
            attributes,
            focal_participant_id: body,
        }
    }

    fn attributes(&self) -> &ExtensionAttributes {
        &self.attributes
    }

    fn body(&self) -> Option<&String> {
        self.focal_participant_id.as_ref()
    }
}
