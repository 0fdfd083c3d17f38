//! Which extensions a registry should decode.
//!
//! Loaded from the `[extensions]` table of a TOML file or from the
//! `JITMEET_EXTENSIONS` environment variable (comma separated names).
//!
//! ```toml
//! [extensions]
//! enabled = ["participant-id", "room-status", "stream"]
//! ```

use std::str::FromStr;

use serde::Deserialize;

use crate::ExtensionError;

/// Environment variable listing the enabled extensions.
pub const ENV_EXTENSIONS: &str = "JITMEET_EXTENSIONS";

/// One of the extension variants, by configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionKind {
    ParticipantId,
    RoomStatus,
    RoomStatusExtended,
    FocalParticipant,
    Stream,
}

impl ExtensionKind {
    /// Every variant, in registration order.
    pub const ALL: [Self; 5] = [
        Self::ParticipantId,
        Self::RoomStatus,
        Self::RoomStatusExtended,
        Self::FocalParticipant,
        Self::Stream,
    ];

    /// Configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParticipantId => "participant-id",
            Self::RoomStatus => "room-status",
            Self::RoomStatusExtended => "room-status-extended",
            Self::FocalParticipant => "focal-participant",
            Self::Stream => "stream",
        }
    }
}

impl std::fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExtensionKind {
    type Err = ExtensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ExtensionError::config(format!("Unknown extension: {}", s)))
    }
}

/// Extension configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Extensions to register; all of them by default
    pub enabled: Vec<ExtensionKind>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            enabled: ExtensionKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    extensions: ExtensionConfig,
}

impl ExtensionConfig {
    /// Create a configuration with every extension enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the enabled extensions.
    pub fn with_enabled(mut self, enabled: impl IntoIterator<Item = ExtensionKind>) -> Self {
        self.enabled = enabled.into_iter().collect();
        self
    }

    pub fn is_enabled(&self, kind: ExtensionKind) -> bool {
        self.enabled.contains(&kind)
    }

    /// Load from TOML text. A missing `[extensions]` table means defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ExtensionError> {
        let file: ConfigFile = toml::from_str(toml_str)
            .map_err(|e| ExtensionError::config(format!("Invalid extension config: {}", e)))?;
        Ok(file.extensions)
    }

    /// Load from `JITMEET_EXTENSIONS`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ExtensionError> {
        match std::env::var(ENV_EXTENSIONS) {
            Ok(list) => Ok(Self::new().with_enabled(parse_kind_list(&list)?)),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(ExtensionError::config(format!("{}: {}", ENV_EXTENSIONS, e))),
        }
    }
}

/// Parse a comma separated list of extension names. Blank entries are skipped.
pub fn parse_kind_list(list: &str) -> Result<Vec<ExtensionKind>, ExtensionError> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ExtensionKind::from_str)
        .collect()
}
