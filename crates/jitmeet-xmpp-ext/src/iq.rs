//! Glue between the extensions and `xmpp_parsers` IQ stanzas.
//!
//! The extensions travel as the single child of an IQ:
//!
//! ```xml
//! <iq type='set' id='stream-1' to='focus@auth.example/focus'>
//!   <stream xmlns='http://jitsi.org/jitmeet/stream' jid='room@muc.example/bob'>false</stream>
//! </iq>
//! ```

use jid::Jid;
use xmpp_parsers::iq::{Iq, IqType};

use crate::extensions::JitMeetExtension;
use crate::registry::ExtensionRegistry;
use crate::{ExtensionError, StanzaExtension};

/// Decode the jitmeet extension carried by an IQ, if any.
///
/// Get, set and non-empty result IQs are inspected; error IQs and empty
/// results yield `Ok(None)`.
pub fn extension_from_iq(
    iq: &Iq,
    registry: &ExtensionRegistry,
) -> Result<Option<JitMeetExtension>, ExtensionError> {
    match &iq.payload {
        IqType::Get(elem) | IqType::Set(elem) | IqType::Result(Some(elem)) => {
            registry.decode_element(elem)
        }
        _ => Ok(None),
    }
}

/// Check if an IQ carries an extension known to `registry`.
pub fn is_extension_iq(iq: &Iq, registry: &ExtensionRegistry) -> bool {
    match &iq.payload {
        IqType::Get(elem) | IqType::Set(elem) | IqType::Result(Some(elem)) => {
            registry.is_registered(&elem.ns(), elem.name())
        }
        _ => false,
    }
}

/// Build an IQ set carrying `extension`.
pub fn build_iq_set<T: StanzaExtension>(
    extension: &T,
    id: impl Into<String>,
    to: Option<Jid>,
) -> Result<Iq, ExtensionError> {
    Ok(Iq {
        from: None,
        to,
        id: id.into(),
        payload: IqType::Set(extension.to_element()?),
    })
}

/// Build an IQ get carrying `extension` (typically a `check`/`get` request).
pub fn build_iq_get<T: StanzaExtension>(
    extension: &T,
    id: impl Into<String>,
    to: Option<Jid>,
) -> Result<Iq, ExtensionError> {
    Ok(Iq {
        from: None,
        to,
        id: id.into(),
        payload: IqType::Get(extension.to_element()?),
    })
}

/// Build the result IQ answering `original_iq` with `extension`.
pub fn build_iq_result<T: StanzaExtension>(
    original_iq: &Iq,
    extension: &T,
) -> Result<Iq, ExtensionError> {
    Ok(Iq {
        from: original_iq.to.clone(),
        to: original_iq.from.clone(),
        id: original_iq.id.clone(),
        payload: IqType::Result(Some(extension.to_element()?)),
    })
}
