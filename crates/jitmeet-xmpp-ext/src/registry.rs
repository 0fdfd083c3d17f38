//! Decoder registry keyed by `(namespace, element)`.
//!
//! Built once at startup and shared read-only afterwards (it is
//! `Send + Sync`, wrap it in an `Arc` to hand it to connection tasks).

use std::collections::HashMap;
use std::fmt;

use minidom::Element;
use tracing::debug;

use crate::config::{ExtensionConfig, ExtensionKind};
use crate::cursor::{ElementCursor, XmlCursor};
use crate::extensions::{
    FocalParticipant, JitMeetExtension, ParticipantId, RoomStatus, RoomStatusExtended,
    StreamControl,
};
use crate::{ExtensionError, StanzaExtension};

type DecodeFn = fn(&mut dyn XmlCursor) -> Result<Option<JitMeetExtension>, ExtensionError>;

fn decode_as<T>(cursor: &mut dyn XmlCursor) -> Result<Option<JitMeetExtension>, ExtensionError>
where
    T: StanzaExtension + Into<JitMeetExtension>,
{
    Ok(T::decode(cursor)?.map(Into::into))
}

/// Maps extension identities to their decoders.
#[derive(Default)]
pub struct ExtensionRegistry {
    /// namespace -> element -> decoder
    decoders: HashMap<&'static str, HashMap<&'static str, DecodeFn>>,
}

impl ExtensionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every jitmeet extension registered.
    pub fn with_all() -> Self {
        Self::from_config(&ExtensionConfig::default())
    }

    /// Create a registry with the extensions enabled in `config`.
    pub fn from_config(config: &ExtensionConfig) -> Self {
        let mut registry = Self::new();
        for kind in &config.enabled {
            registry.register_kind(*kind);
        }
        registry
    }

    /// Register the decoder for `T`. Re-registering replaces the entry.
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: StanzaExtension + Into<JitMeetExtension>,
    {
        let descriptor = T::DESCRIPTOR;
        self.decoders
            .entry(descriptor.namespace)
            .or_default()
            .insert(descriptor.element, decode_as::<T>);
        debug!(
            namespace = descriptor.namespace,
            element = descriptor.element,
            "Registered extension decoder"
        );
        self
    }

    /// Register a variant by configuration name.
    pub fn register_kind(&mut self, kind: ExtensionKind) -> &mut Self {
        match kind {
            ExtensionKind::ParticipantId => self.register::<ParticipantId>(),
            ExtensionKind::RoomStatus => self.register::<RoomStatus>(),
            ExtensionKind::RoomStatusExtended => self.register::<RoomStatusExtended>(),
            ExtensionKind::FocalParticipant => self.register::<FocalParticipant>(),
            ExtensionKind::Stream => self.register::<StreamControl>(),
        }
    }

    pub fn is_registered(&self, namespace: &str, element: &str) -> bool {
        self.lookup(namespace, element).is_some()
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.decoders.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Decode whatever extension the cursor is positioned on.
    ///
    /// Returns `Ok(None)` for identities nobody registered.
    pub fn decode(
        &self,
        cursor: &mut dyn XmlCursor,
    ) -> Result<Option<JitMeetExtension>, ExtensionError> {
        let Some(decoder) = self.lookup(cursor.namespace(), cursor.name()) else {
            return Ok(None);
        };
        decoder(cursor)
    }

    fn lookup(&self, namespace: &str, element: &str) -> Option<DecodeFn> {
        self.decoders
            .get(namespace)
            .and_then(|elements| elements.get(element))
            .copied()
    }

    /// Decode a parsed element.
    pub fn decode_element(
        &self,
        element: &Element,
    ) -> Result<Option<JitMeetExtension>, ExtensionError> {
        let mut cursor = ElementCursor::new(element);
        self.decode(&mut cursor)
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identities: Vec<(&str, &str)> = self
            .decoders
            .iter()
            .flat_map(|(namespace, elements)| elements.keys().map(move |element| (*namespace, *element)))
            .collect();
        f.debug_struct("ExtensionRegistry")
            .field("identities", &identities)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::parse_element;
    use crate::ns;

    #[test]
    fn test_with_all_registers_every_identity() {
        let registry = ExtensionRegistry::with_all();

        assert_eq!(registry.len(), 5);
        assert!(registry.is_registered(ns::PARTICIPANT, ns::element::PARTICIPANT_ID));
        assert!(registry.is_registered(ns::ROOM_STATUS, ns::element::ROOM_STATUS));
        assert!(registry.is_registered(ns::ROOM_STATUS_EXTENDED, ns::element::ROOM_STATUS_EXTENDED));
        assert!(registry.is_registered(ns::ROOM_FOCAL_PARTICIPANT, ns::element::ROOM_FOCAL_PARTICIPANT));
        assert!(registry.is_registered(ns::STREAM, ns::element::STREAM));
    }

    #[test]
    fn test_from_config_only_registers_enabled() {
        let config = ExtensionConfig::new().with_enabled([ExtensionKind::Stream]);
        let registry = ExtensionRegistry::from_config(&config);

        assert_eq!(registry.len(), 1);
        assert!(registry.is_registered(ns::STREAM, ns::element::STREAM));

        let element = parse_element(
            "<roomStatus xmlns='http://jitsi.org/jitmeet/roomstatus'>true</roomStatus>",
        )
        .unwrap();
        assert!(registry.decode_element(&element).unwrap().is_none());
    }

    #[test]
    fn test_decode_dispatches_by_identity() {
        let registry = ExtensionRegistry::with_all();
        let element = parse_element(
            "<stream xmlns='http://jitsi.org/jitmeet/stream' jid='room@muc.example/bob'>true</stream>",
        )
        .unwrap();

        match registry.decode_element(&element).unwrap() {
            Some(JitMeetExtension::Stream(stream)) => assert_eq!(stream.stream(), Some(true)),
            other => panic!("Expected stream extension, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExtensionRegistry>();
    }
}
