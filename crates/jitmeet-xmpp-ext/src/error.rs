//! Error types for the extension codec.

use thiserror::Error;

/// Errors raised while decoding or encoding a jitmeet extension.
///
/// A namespace or element mismatch is not an error: decoders return
/// `Ok(None)` so a registry can route the stanza elsewhere. Empty or
/// unparseable body text is recovered inside the decoder and never shows up
/// here either.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// A JID-typed attribute could not be parsed.
    #[error("Malformed JID in '{attribute}' attribute ({value:?}): {source}")]
    MalformedJid {
        /// Attribute name on the wire
        attribute: &'static str,
        /// Raw attribute value
        value: String,
        /// Underlying JID parse error
        #[source]
        source: jid::Error,
    },

    /// Encoder invoked on a value whose body was never set.
    #[error("Incomplete <{element}/> extension: body is not set")]
    IncompleteValue {
        /// Element name of the extension
        element: &'static str,
    },

    /// Encoder input contains a character XML 1.0 cannot carry.
    #[error("Invalid character {character:?} in <{element}/> extension")]
    InvalidCharacter {
        /// Element name of the extension
        element: &'static str,
        /// Offending character
        character: char,
    },

    /// The cursor ran out of events before the closing tag.
    #[error("XML input ended inside <{element}>")]
    Truncated {
        /// Element that was still open
        element: String,
    },

    /// Raw XML could not be parsed into an element.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtensionError {
    /// Create a new malformed JID error.
    pub fn malformed_jid(attribute: &'static str, value: impl Into<String>, source: jid::Error) -> Self {
        Self::MalformedJid {
            attribute,
            value: value.into(),
            source,
        }
    }

    /// Create a new incomplete value error.
    pub fn incomplete(element: &'static str) -> Self {
        Self::IncompleteValue { element }
    }

    /// Create a new invalid character error.
    pub fn invalid_character(element: &'static str, character: char) -> Self {
        Self::InvalidCharacter { element, character }
    }

    /// Create a new truncated input error.
    pub fn truncated(element: impl Into<String>) -> Self {
        Self::Truncated {
            element: element.into(),
        }
    }

    /// Create a new XML parse error.
    pub fn xml_parse(msg: impl Into<String>) -> Self {
        Self::XmlParse(msg.into())
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error was caused by a corrupt identifier attribute.
    pub fn is_malformed_jid(&self) -> bool {
        matches!(self, Self::MalformedJid { .. })
    }
}
