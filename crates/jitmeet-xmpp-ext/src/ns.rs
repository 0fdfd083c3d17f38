//! Wire identities of the jitmeet extensions.
//!
//! These strings must match the conferencing backend bit for bit.

/// Participant identity namespace
pub const PARTICIPANT: &str = "http://jitsi.org/jitmeet/participant";
/// Room open/closed status namespace
pub const ROOM_STATUS: &str = "http://jitsi.org/jitmeet/roomstatus";
/// Integer room status namespace
pub const ROOM_STATUS_EXTENDED: &str = "http://jitsi.org/jitmeet/veazzyroomstatus";
/// Focal participant namespace
pub const ROOM_FOCAL_PARTICIPANT: &str = "http://jitsi.org/jitmeet/roomfocalparticipant";
/// Stream on/off namespace
pub const STREAM: &str = "http://jitsi.org/jitmeet/stream";

/// Element names.
pub mod element {
    pub const PARTICIPANT_ID: &str = "participantId";
    pub const ROOM_STATUS: &str = "roomStatus";
    pub const ROOM_STATUS_EXTENDED: &str = "veazzyRoomStatus";
    pub const ROOM_FOCAL_PARTICIPANT: &str = "roomFocalParticipant";
    pub const STREAM: &str = "stream";
}

/// Attribute names.
pub mod attr {
    /// Target participant MUC JID
    pub const JID: &str = "jid";
    /// JID of the peer that initiated the request
    pub const ACTOR: &str = "actor";
    /// Whether the moderator is included
    pub const WITH_ME: &str = "withMe";
}

/// Body token turning a room status into a "report current value" request.
pub const ROOM_STATUS_CHECK: &str = "check";
/// Body token turning an integer room status into a "report current value" request.
pub const ROOM_STATUS_GET: &str = "get";
