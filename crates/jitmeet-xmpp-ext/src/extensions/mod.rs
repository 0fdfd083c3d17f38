//! Jitmeet meeting-control extensions.
//!
//! - **participantId**: participant identity, with optional `withMe` flag.
//! - **roomStatus**: room open/closed flag, `check` asks for the current value.
//! - **veazzyRoomStatus**: integer room status code, `get` asks for the current value.
//! - **roomFocalParticipant**: focal participant designation.
//! - **stream**: stream on/off flag.

pub mod focal_participant;
pub mod participant;
pub mod room_status;
pub mod room_status_extended;
pub mod stream;

use minidom::Element;

use crate::{ExtensionError, StanzaExtension};

pub use focal_participant::FocalParticipant;
pub use participant::ParticipantId;
pub use room_status::RoomStatus;
pub use room_status_extended::{RoomStatusCode, RoomStatusExtended};
pub use stream::StreamControl;

/// Any decoded jitmeet extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JitMeetExtension {
    ParticipantId(ParticipantId),
    RoomStatus(RoomStatus),
    RoomStatusExtended(RoomStatusExtended),
    FocalParticipant(FocalParticipant),
    Stream(StreamControl),
}

impl JitMeetExtension {
    /// Element name of the wrapped extension.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::ParticipantId(_) => ParticipantId::DESCRIPTOR.element,
            Self::RoomStatus(_) => RoomStatus::DESCRIPTOR.element,
            Self::RoomStatusExtended(_) => RoomStatusExtended::DESCRIPTOR.element,
            Self::FocalParticipant(_) => FocalParticipant::DESCRIPTOR.element,
            Self::Stream(_) => StreamControl::DESCRIPTOR.element,
        }
    }

    /// Serialize to the bare fragment (no `xmlns`).
    pub fn to_xml(&self) -> Result<String, ExtensionError> {
        match self {
            Self::ParticipantId(ext) => ext.to_xml(),
            Self::RoomStatus(ext) => ext.to_xml(),
            Self::RoomStatusExtended(ext) => ext.to_xml(),
            Self::FocalParticipant(ext) => ext.to_xml(),
            Self::Stream(ext) => ext.to_xml(),
        }
    }

    /// Serialize to a namespaced element.
    pub fn to_element(&self) -> Result<Element, ExtensionError> {
        match self {
            Self::ParticipantId(ext) => ext.to_element(),
            Self::RoomStatus(ext) => ext.to_element(),
            Self::RoomStatusExtended(ext) => ext.to_element(),
            Self::FocalParticipant(ext) => ext.to_element(),
            Self::Stream(ext) => ext.to_element(),
        }
    }
}

impl From<ParticipantId> for JitMeetExtension {
    fn from(ext: ParticipantId) -> Self {
        Self::ParticipantId(ext)
    }
}

impl From<RoomStatus> for JitMeetExtension {
    fn from(ext: RoomStatus) -> Self {
        Self::RoomStatus(ext)
    }
}

impl From<RoomStatusExtended> for JitMeetExtension {
    fn from(ext: RoomStatusExtended) -> Self {
        Self::RoomStatusExtended(ext)
    }
}

impl From<FocalParticipant> for JitMeetExtension {
    fn from(ext: FocalParticipant) -> Self {
        Self::FocalParticipant(ext)
    }
}

impl From<StreamControl> for JitMeetExtension {
    fn from(ext: StreamControl) -> Self {
        Self::Stream(ext)
    }
}
