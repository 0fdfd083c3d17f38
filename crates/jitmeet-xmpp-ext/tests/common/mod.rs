//! Shared helpers for the wire-level tests.

#![allow(dead_code)]

use jid::Jid;
use jitmeet_xmpp_ext::{ExtensionError, StanzaExtension};

/// Install a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jitmeet_xmpp_ext=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn jid(s: &str) -> Jid {
    s.parse().expect("valid test JID")
}

/// Every optional JID: absent or one of two fixed values.
pub fn optional_jids(a: &str) -> [Option<Jid>; 2] {
    [None, Some(jid(a))]
}

/// Insert the extension's `xmlns` into a bare fragment so minidom can parse it.
pub fn with_xmlns<T: StanzaExtension>(fragment: &str) -> String {
    let element = T::DESCRIPTOR.element;
    let open = format!("<{}", element);
    assert!(fragment.starts_with(&open), "fragment {fragment} is not <{element}>");
    format!(
        "<{} xmlns='{}'{}",
        element,
        T::DESCRIPTOR.namespace,
        &fragment[open.len()..]
    )
}

/// Encode to the bare fragment and decode it back.
pub fn round_trip_xml<T: StanzaExtension>(value: &T) -> Result<T, ExtensionError> {
    let fragment = value.to_xml()?;
    let decoded = T::from_xml(&with_xmlns::<T>(&fragment))?;
    Ok(decoded.expect("decoder recognises its own fragment"))
}

/// Encode to a namespaced element and decode it back.
pub fn round_trip_element<T: StanzaExtension>(value: &T) -> Result<T, ExtensionError> {
    let element = value.to_element()?;
    let decoded = T::from_element(&element)?;
    Ok(decoded.expect("decoder recognises its own element"))
}
