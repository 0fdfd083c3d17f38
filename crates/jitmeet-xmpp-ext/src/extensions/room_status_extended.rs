//! Integer room status (`veazzyRoomStatus`).
//!
//! Same shape as [`RoomStatus`](super::RoomStatus) but the body is a status
//! code rather than a boolean, and the request token is `get`.
//!
//! ```xml
//! <veazzyRoomStatus xmlns='http://jitsi.org/jitmeet/veazzyroomstatus' jid='room@muc.example'>1</veazzyRoomStatus>
//! <veazzyRoomStatus xmlns='http://jitsi.org/jitmeet/veazzyroomstatus' jid='room@muc.example'>get</veazzyRoomStatus>
//! ```

use std::borrow::Cow;
use std::fmt;

use jid::Jid;
use tracing::warn;

use crate::extension::{
    ExtensionAttribute, ExtensionAttributes, ExtensionDescriptor, StanzaExtension, StatusBody,
};
use crate::ns;

/// Room status code carried by [`RoomStatusExtended`].
///
/// Codes outside the named constants are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomStatusCode(pub i32);

impl RoomStatusCode {
    pub const CLOSED: Self = Self(0);
    pub const OPENED: Self = Self(1);
    pub const PENDING: Self = Self(2);

    /// Parse a decimal code. Text that is not an `i32` yields [`Self::OPENED`].
    pub fn parse_or_opened(text: &str) -> Self {
        match text.parse::<i32>() {
            Ok(code) => Self(code),
            Err(e) => {
                warn!(text = %text, error = %e, "Unparseable room status code, assuming opened");
                Self::OPENED
            }
        }
    }

    pub fn code(self) -> i32 {
        self.0
    }
}

impl From<i32> for RoomStatusCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for RoomStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer room status extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStatusExtended {
    attributes: ExtensionAttributes,
    body: Option<StatusBody<RoomStatusCode>>,
}

impl RoomStatusExtended {
    /// Set the room status to `code`.
    pub fn new(code: impl Into<RoomStatusCode>) -> Self {
        Self {
            attributes: ExtensionAttributes::default(),
            body: Some(StatusBody::Value(code.into())),
        }
    }

    /// Ask for the current room status.
    pub fn get() -> Self {
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

    /// Whether this is a `get` request.
    pub fn is_check_request(&self) -> bool {
        self.body.as_ref().is_some_and(StatusBody::is_check)
    }

    /// The status code, `None` for `get` requests and empty bodies.
    pub fn status(&self) -> Option<RoomStatusCode> {
        self.body.as_ref().and_then(|body| body.value().copied())
    }
}

impl StanzaExtension for RoomStatusExtended {
    const DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
        namespace: ns::ROOM_STATUS_EXTENDED,
        element: ns::element::ROOM_STATUS_EXTENDED,
        attributes: &[ExtensionAttribute::Jid, ExtensionAttribute::Actor],
        escape_token: Some(ns::ROOM_STATUS_GET),
        warn_on_empty_body: true,
    };

    type Body = StatusBody<RoomStatusCode>;

    fn interpret_text(text: &str) -> StatusBody<RoomStatusCode> {
        StatusBody::interpret(&Self::DESCRIPTOR, text, RoomStatusCode::parse_or_opened)
    }

    fn body_text(body: &StatusBody<RoomStatusCode>) -> Cow<'_, str> {
        match body {
            StatusBody::Check => Cow::Borrowed(ns::ROOM_STATUS_GET),
            StatusBody::Value(code) => Cow::Owned(code.to_string()),
        }
    }

    fn from_parts(
        attributes: ExtensionAttributes,
        body: Option<StatusBody<RoomStatusCode>>,
    ) -> Self {
        Self { attributes, body }
    }

    fn attributes(&self) -> &ExtensionAttributes {
        &self.attributes
    }

    fn body(&self) -> Option<&StatusBody<RoomStatusCode>> {
        self.body.as_ref()
    }
}
