//! Wire compatibility tests for the jitmeet extensions.
//!
//! Fixtures mirror what the conferencing backend puts on the wire.

mod common;

use common::{init_tracing, jid, optional_jids, round_trip_element, round_trip_xml};
use jitmeet_xmpp_ext::{
    ElementCursor, ExtensionError, FocalParticipant, ParticipantId, RoomStatus, RoomStatusCode,
    RoomStatusExtended, StanzaExtension, StreamControl,
};

const ALICE: &str = "room@muc.example/alice";
const FOCUS: &str = "focus@auth.example/focus";

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_participant_id_with_moderator() {
    init_tracing();
    let xml = r#"<participantId xmlns='http://jitsi.org/jitmeet/participant' jid="room@muc.example/alice" withMe="true">spk-1</participantId>"#;

    let participant = ParticipantId::from_xml(xml).unwrap().unwrap();

    assert_eq!(participant.jid(), Some(&jid("room@muc.example/alice")));
    assert_eq!(participant.with_me(), Some(true));
    assert_eq!(participant.participant_id(), Some("spk-1"));
    assert_eq!(participant.actor(), None);
}

#[test]
fn test_room_status_check_request() {
    init_tracing();
    let xml = r#"<roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus' jid="room@muc.example">check</roomStatus>"#;

    let status = RoomStatus::from_xml(xml).unwrap().unwrap();

    assert!(status.is_check_request());
    assert_eq!(status.status(), None);
}

#[test]
fn test_room_status_value() {
    init_tracing();
    let xml = r#"<roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus' jid="room@muc.example">true</roomStatus>"#;

    let status = RoomStatus::from_xml(xml).unwrap().unwrap();

    assert!(!status.is_check_request());
    assert_eq!(status.status(), Some(true));
    assert_eq!(status.jid(), Some(&jid("room@muc.example")));
}

#[test]
fn test_stream_off_without_actor() {
    let stream = StreamControl::new(false).with_jid(jid("room@muc.example/bob"));

    assert_eq!(
        stream.to_xml().unwrap(),
        r#"<stream jid="room@muc.example/bob">false</stream>"#
    );
}

#[test]
fn test_room_status_extended_garbage_is_opened() {
    init_tracing();
    let xml = r#"<veazzyRoomStatus xmlns='http://jitsi.org/jitmeet/veazzyroomstatus' jid='room@muc.example'>abc</veazzyRoomStatus>"#;

    let status = RoomStatusExtended::from_xml(xml).unwrap().unwrap();

    assert!(!status.is_check_request());
    assert_eq!(status.status(), Some(RoomStatusCode::OPENED));
}

// ============================================================================
// Round trips over every attribute combination
// ============================================================================

#[test]
fn test_participant_id_round_trips() {
    for jid in optional_jids(ALICE) {
        for actor in optional_jids(FOCUS) {
            for with_me in [None, Some(true), Some(false)] {
                let mut value = ParticipantId::new("spk-1 & <friends>");
                if let Some(ref j) = jid {
                    value = value.with_jid(j.clone());
                }
                if let Some(ref a) = actor {
                    value = value.with_actor(a.clone());
                }
                if let Some(w) = with_me {
                    value = value.with_with_me(w);
                }

                assert_eq!(round_trip_xml(&value).unwrap(), value);
                assert_eq!(round_trip_element(&value).unwrap(), value);
            }
        }
    }
}

#[test]
fn test_status_round_trips() {
    for jid in optional_jids("room@muc.example") {
        for actor in optional_jids(FOCUS) {
            let with_attrs = |status: RoomStatus| {
                let status = match jid {
                    Some(ref j) => status.with_jid(j.clone()),
                    None => status,
                };
                match actor {
                    Some(ref a) => status.with_actor(a.clone()),
                    None => status,
                }
            };

            for status in [RoomStatus::new(true), RoomStatus::new(false), RoomStatus::check()] {
                let status = with_attrs(status);
                assert_eq!(round_trip_xml(&status).unwrap(), status);
                assert_eq!(round_trip_element(&status).unwrap(), status);
            }

            for code in [
                RoomStatusExtended::new(RoomStatusCode::CLOSED),
                RoomStatusExtended::new(RoomStatusCode::OPENED),
                RoomStatusExtended::new(RoomStatusCode::PENDING),
                RoomStatusExtended::new(-42),
                RoomStatusExtended::get(),
            ] {
                let mut code = code;
                if let Some(ref j) = jid {
                    code = code.with_jid(j.clone());
                }
                if let Some(ref a) = actor {
                    code = code.with_actor(a.clone());
                }
                assert_eq!(round_trip_xml(&code).unwrap(), code);
                assert_eq!(round_trip_element(&code).unwrap(), code);
            }
        }
    }
}

#[test]
fn test_focal_and_stream_round_trips() {
    for jid in optional_jids(ALICE) {
        for actor in optional_jids(FOCUS) {
            let mut focal = FocalParticipant::new("spk-7");
            let mut on = StreamControl::new(true);
            let mut off = StreamControl::new(false);
            if let Some(ref j) = jid {
                focal = focal.with_jid(j.clone());
                on = on.with_jid(j.clone());
                off = off.with_jid(j.clone());
            }
            if let Some(ref a) = actor {
                focal = focal.with_actor(a.clone());
                on = on.with_actor(a.clone());
                off = off.with_actor(a.clone());
            }

            assert_eq!(round_trip_xml(&focal).unwrap(), focal);
            assert_eq!(round_trip_element(&focal).unwrap(), focal);
            assert_eq!(round_trip_xml(&on).unwrap(), on);
            assert_eq!(round_trip_xml(&off).unwrap(), off);
            assert_eq!(round_trip_element(&off).unwrap(), off);
        }
    }
}

// ============================================================================
// Namespace isolation
// ============================================================================

#[test]
fn test_foreign_namespace_is_no_match() {
    let fixtures = [
        "<participantId xmlns='urn:other' jid='room@muc.example/alice'>spk-1</participantId>",
        "<roomStatus xmlns='urn:other' jid=''>check</roomStatus>",
        "<veazzyRoomStatus xmlns='urn:other'>get</veazzyRoomStatus>",
        "<roomFocalParticipant xmlns='urn:other'>spk-1</roomFocalParticipant>",
        "<stream xmlns='http://jitsi.org/jitmeet/participant'>true</stream>",
    ];

    for xml in fixtures {
        let element = jitmeet_xmpp_ext::parse_element(xml).unwrap();

        let mut cursor = ElementCursor::new(&element);
        assert!(ParticipantId::decode(&mut cursor).unwrap().is_none());
        assert!(RoomStatus::decode(&mut cursor).unwrap().is_none());
        assert!(RoomStatusExtended::decode(&mut cursor).unwrap().is_none());
        assert!(FocalParticipant::decode(&mut cursor).unwrap().is_none());
        assert!(StreamControl::decode(&mut cursor).unwrap().is_none());

        // Nothing was consumed from the cursor.
        assert_eq!(cursor.depth(), 1, "{xml}");
    }
}

#[test]
fn test_foreign_namespace_never_reads_attributes() {
    // A corrupt JID under a foreign namespace must not surface as an error.
    let xml = "<stream xmlns='urn:other' jid='' actor='@'>true</stream>";
    assert!(StreamControl::from_xml(xml).unwrap().is_none());
}

// ============================================================================
// Escape tokens
// ============================================================================

#[test]
fn test_check_token_wins_regardless_of_attributes() {
    for attrs in ["", " jid='room@muc.example'", " jid='room@muc.example' actor='focus@auth.example'"] {
        let xml = format!(
            "<roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus'{}>check</roomStatus>",
            attrs
        );
        let status = RoomStatus::from_xml(&xml).unwrap().unwrap();
        assert!(status.is_check_request(), "{xml}");
        assert_eq!(status.status(), None);
    }
}

#[test]
fn test_tokens_are_not_interchangeable() {
    let status = RoomStatus::from_xml(
        "<roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus'>get</roomStatus>",
    )
    .unwrap()
    .unwrap();
    assert!(!status.is_check_request());
    assert_eq!(status.status(), Some(false));

    let extended = RoomStatusExtended::from_xml(
        "<veazzyRoomStatus xmlns='http://jitsi.org/jitmeet/veazzyroomstatus'>check</veazzyRoomStatus>",
    )
    .unwrap()
    .unwrap();
    assert!(!extended.is_check_request());
    assert_eq!(extended.status(), Some(RoomStatusCode::OPENED));

    let extended = RoomStatusExtended::from_xml(
        "<veazzyRoomStatus xmlns='http://jitsi.org/jitmeet/veazzyroomstatus' actor='focus@auth.example'>get</veazzyRoomStatus>",
    )
    .unwrap()
    .unwrap();
    assert!(extended.is_check_request());
}

// ============================================================================
// Identifier corruption
// ============================================================================

#[test]
fn test_corrupt_jid_fails_the_decode() {
    init_tracing();
    let fixtures = [
        "<participantId xmlns='http://jitsi.org/jitmeet/participant' jid=''>spk-1</participantId>",
        "<participantId xmlns='http://jitsi.org/jitmeet/participant' jid='room@muc.example/alice' actor='@muc.example'>spk-1</participantId>",
        "<roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus' jid=''>check</roomStatus>",
        "<veazzyRoomStatus xmlns='http://jitsi.org/jitmeet/veazzyroomstatus' actor=''>1</veazzyRoomStatus>",
        "<roomFocalParticipant xmlns='http://jitsi.org/jitmeet/roomfocalparticipant' jid=''>spk-1</roomFocalParticipant>",
        "<stream xmlns='http://jitsi.org/jitmeet/stream' jid=''>true</stream>",
    ];

    let registry = jitmeet_xmpp_ext::ExtensionRegistry::with_all();
    for xml in fixtures {
        let element = jitmeet_xmpp_ext::parse_element(xml).unwrap();
        let err = registry.decode_element(&element).unwrap_err();
        assert!(err.is_malformed_jid(), "{xml}: {err}");
    }
}

#[test]
fn test_corrupt_jid_reports_attribute() {
    let err = StreamControl::from_xml(
        "<stream xmlns='http://jitsi.org/jitmeet/stream' jid='room@muc.example/bob' actor=''>true</stream>",
    )
    .unwrap_err();

    match err {
        ExtensionError::MalformedJid { attribute, value, .. } => {
            assert_eq!(attribute, "actor");
            assert_eq!(value, "");
        }
        other => panic!("Expected MalformedJid, got {other:?}"),
    }
}

// ============================================================================
// Incomplete values
// ============================================================================

#[test]
fn test_decoded_empty_values_refuse_to_encode() {
    let participant = ParticipantId::from_xml(
        "<participantId xmlns='http://jitsi.org/jitmeet/participant' jid='room@muc.example/alice'/>",
    )
    .unwrap()
    .unwrap();
    let focal = FocalParticipant::from_xml(
        "<roomFocalParticipant xmlns='http://jitsi.org/jitmeet/roomfocalparticipant'/>",
    )
    .unwrap()
    .unwrap();
    let status = RoomStatus::from_xml("<roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus'/>")
        .unwrap()
        .unwrap();

    assert!(matches!(
        participant.to_xml(),
        Err(ExtensionError::IncompleteValue { element: "participantId" })
    ));
    assert!(matches!(
        focal.to_element(),
        Err(ExtensionError::IncompleteValue { element: "roomFocalParticipant" })
    ));
    assert!(matches!(
        status.to_xml(),
        Err(ExtensionError::IncompleteValue { element: "roomStatus" })
    ));
}

// ============================================================================
// Characters the wire must carry or refuse
// ============================================================================

#[test]
fn test_line_breaks_survive_round_trip() {
    for id in ["a\r\nb", "a\rb", "tab\there", "line\nfeed"] {
        let participant = ParticipantId::new(id).with_jid(jid(ALICE));

        let decoded = round_trip_xml(&participant).unwrap();
        assert_eq!(decoded.participant_id(), Some(id), "{id:?}");
        assert_eq!(round_trip_element(&participant).unwrap(), participant);
    }
}

#[test]
fn test_unrepresentable_characters_are_refused() {
    for id in ["a\u{1}b", "\u{0}", "bell\u{7}", "\u{FFFF}"] {
        let participant = ParticipantId::new(id);
        let focal = FocalParticipant::new(id);

        assert!(
            matches!(participant.to_xml(), Err(ExtensionError::InvalidCharacter { element: "participantId", .. })),
            "{id:?}"
        );
        assert!(
            matches!(focal.to_element(), Err(ExtensionError::InvalidCharacter { element: "roomFocalParticipant", .. })),
            "{id:?}"
        );
    }
}

#[test]
fn test_empty_identifier_is_refused() {
    let participant = ParticipantId::new("").with_with_me(true);
    let focal = FocalParticipant::new("").with_jid(jid(ALICE));

    assert!(matches!(
        participant.to_xml(),
        Err(ExtensionError::IncompleteValue { element: "participantId" })
    ));
    assert!(matches!(
        focal.to_element(),
        Err(ExtensionError::IncompleteValue { element: "roomFocalParticipant" })
    ));
}
