//! # jitmeet-xmpp-ext
//!
//! Typed encoding and decoding of the jitmeet meeting-control IQ
//! extensions: participant identity, room status (boolean and integer),
//! focal participant and stream on/off.
//!
//! ## Architecture
//!
//! - **Cursor**: decoders pull events from an [`XmlCursor`] positioned on the
//!   extension's start tag; [`ElementCursor`] walks a minidom element.
//! - **Builder**: encoders push attributes and body text into a
//!   [`FragmentBuilder`]; [`XmlFragmentBuilder`] yields the bare fragment,
//!   [`ElementFragmentBuilder`] a namespaced element for IQ payloads.
//! - **Extensions**: each variant is a [`StanzaExtension`] described by a
//!   static [`ExtensionDescriptor`]; one shared loop decodes them all.
//! - **Registry**: [`ExtensionRegistry`] maps `(namespace, element)` to a
//!   decoder and is populated once at startup.
//!
//! Transport, routing, authentication and MUC membership belong to the
//! surrounding XMPP stack.
//!
//! ## Example
//!
//! ```
//! use jitmeet_xmpp_ext::{ExtensionRegistry, JitMeetExtension, StanzaExtension, StreamControl};
//!
//! let stream = StreamControl::new(false).with_jid("room@muc.example/bob".parse().unwrap());
//! assert_eq!(stream.to_xml().unwrap(), r#"<stream jid="room@muc.example/bob">false</stream>"#);
//!
//! let registry = ExtensionRegistry::with_all();
//! let element = stream.to_element().unwrap();
//! assert_eq!(
//!     registry.decode_element(&element).unwrap(),
//!     Some(JitMeetExtension::Stream(stream))
//! );
//! ```

pub mod builder;
pub mod config;
pub mod cursor;
pub mod extension;
pub mod extensions;
pub mod iq;
pub mod ns;
pub mod registry;

mod error;

pub use builder::{ElementFragmentBuilder, FragmentBuilder, XmlFragmentBuilder};
pub use config::{ExtensionConfig, ExtensionKind};
pub use cursor::{parse_element, ElementCursor, XmlCursor, XmlEvent};
pub use error::ExtensionError;
pub use extension::{
    ExtensionAttribute, ExtensionAttributes, ExtensionDescriptor, StanzaExtension, StatusBody,
};
pub use extensions::{
    FocalParticipant, JitMeetExtension, ParticipantId, RoomStatus, RoomStatusCode,
    RoomStatusExtended, StreamControl,
};
pub use iq::{build_iq_get, build_iq_result, build_iq_set, extension_from_iq, is_extension_iq};
pub use registry::ExtensionRegistry;
