//! Participant identity (`participantId`).
//!
//! Signals which participant id a MUC occupant is using, optionally on
//! behalf of another peer and with the moderator included.
//!
//! ```xml
//! <participantId xmlns='http://jitsi.org/jitmeet/participant'
//!                jid='room@muc.example/alice'
//!                actor='room@muc.example/focus'
//!                withMe='true'>spk-1</participantId>
//! ```

use std::borrow::Cow;

use jid::Jid;

use crate::extension::{ExtensionAttribute, ExtensionAttributes, ExtensionDescriptor, StanzaExtension};
use crate::ns;

/// Participant identity extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantId {
    attributes: ExtensionAttributes,
    participant_id: Option<String>,
}

impl ParticipantId {
    /// Create a participant identity carrying `participant_id`.
    ///
    /// An empty id has no wire form; encoding it fails with
    /// [`ExtensionError::IncompleteValue`](crate::ExtensionError::IncompleteValue).
    pub fn new(participant_id: impl Into<String>) -> Self {
        Self {
            attributes: ExtensionAttributes::default(),
            participant_id: Some(participant_id.into()),
        }
    }

    /// Set the participant's MUC JID (`room@muc.server/nick`).
    pub fn with_jid(mut self, jid: Jid) -> Self {
        self.attributes.jid = Some(jid);
        self
    }

    /// Set the peer that initiated the request.
    pub fn with_actor(mut self, actor: Jid) -> Self {
        self.attributes.actor = Some(actor);
        self
    }

    /// Include (`true`) or exclude (`false`) the moderator.
    pub fn with_with_me(mut self, with_me: bool) -> Self {
        self.attributes.with_me = Some(with_me);
        self
    }

    pub fn jid(&self) -> Option<&Jid> {
        self.attributes.jid.as_ref()
    }

    pub fn actor(&self) -> Option<&Jid> {
        self.attributes.actor.as_ref()
    }

    /// `None` when the attribute was absent.
    pub fn with_me(&self) -> Option<bool> {
        self.attributes.with_me
    }

    /// `None` when the element arrived without text.
    pub fn participant_id(&self) -> Option<&str> {
        self.participant_id.as_deref()
    }
}

impl StanzaExtension for ParticipantId {
    const DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
        namespace: ns::PARTICIPANT,
        element: ns::element::PARTICIPANT_ID,
        attributes: &[
            ExtensionAttribute::Jid,
            ExtensionAttribute::Actor,
            ExtensionAttribute::WithMe,
        ],
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
            participant_id: body,
        }
    }

    fn attributes(&self) -> &ExtensionAttributes {
        &self.attributes
    }

    fn body(&self) -> Option<&String> {
        self.participant_id.as_ref()
    }
}
