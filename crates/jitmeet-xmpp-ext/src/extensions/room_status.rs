//! Room open/closed status (`roomStatus`).
//!
//! The body is either a boolean (room open) or the literal `check`, which
//! asks the receiver to report the current status instead of setting it.
//!
//! ```xml
//! <roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus' jid='room@muc.example'>true</roomStatus>
//! <roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus' jid='room@muc.example'>check</roomStatus>
//! ```

use std::borrow::Cow;

use jid::Jid;

use crate::extension::{
    bool_text, parse_lenient_bool, ExtensionAttribute, ExtensionAttributes, ExtensionDescriptor,
    StanzaExtension, StatusBody,
};
use crate::ns;

/// Room status extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStatus {
    attributes: ExtensionAttributes,
    body: Option<StatusBody<bool>>,
}

impl RoomStatus {
    /// Set the room to open (`true`) or closed (`false`).
    pub fn new(open: bool) -> Self {
        Self {
            attributes: ExtensionAttributes::default(),
            body: Some(StatusBody::Value(open)),
        }
    }

    /// Ask for the current room status.
    pub fn check() -> Self {
        Self {
            attributes: ExtensionAttributes::default(),
            body: Some(StatusBody::Check),
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

    /// Whether this is a `check` request.
    pub fn is_check_request(&self) -> bool {
        self.body.as_ref().is_some_and(StatusBody::is_check)
    }

    /// The open/closed flag, `None` for check requests and empty bodies.
    pub fn status(&self) -> Option<bool> {
        self.body.as_ref().and_then(|body| body.value().copied())
    }
}

impl StanzaExtension for RoomStatus {
    const DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
        namespace: ns::ROOM_STATUS,
        element: ns::element::ROOM_STATUS,
        attributes: &[ExtensionAttribute::Jid, ExtensionAttribute::Actor],
        escape_token: Some(ns::ROOM_STATUS_CHECK),
        warn_on_empty_body: true,
    };

    type Body = StatusBody<bool>;

    fn interpret_text(text: &str) -> StatusBody<bool> {
        StatusBody::interpret(&Self::DESCRIPTOR, text, parse_lenient_bool)
    }

    fn body_text(body: &StatusBody<bool>) -> Cow<'_, str> {
        match body {
            StatusBody::Check => Cow::Borrowed(ns::ROOM_STATUS_CHECK),
            StatusBody::Value(open) => Cow::Borrowed(bool_text(*open)),
        }
    }

    fn from_parts(attributes: ExtensionAttributes, body: Option<StatusBody<bool>>) -> Self {
        Self { attributes, body }
    }

    fn attributes(&self) -> &ExtensionAttributes {
        &self.attributes
    }

    fn body(&self) -> Option<&StatusBody<bool>> {
        self.body.as_ref()
    }
}
