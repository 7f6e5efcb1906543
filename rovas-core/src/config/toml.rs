//! TOML loading for the face configuration
//!
//! ```toml
//! [face]
//! debug_input = true
//! tick_unit = "minute"
//! show_on_load = true
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use serde::Deserialize;

use super::types::FaceConfig;

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input is not valid TOML
    Syntax,
    /// A key has the wrong type, an unknown value, or is not recognized
    InvalidValue,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    face: FaceConfig,
}

impl FaceConfig {
    /// Parse a configuration file
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        // Check syntax first so the two failure kinds can be told apart
        toml::from_str::<toml::Table>(input).map_err(|_| ConfigError::Syntax)?;
        let file: ConfigFile = toml::from_str(input).map_err(|_| ConfigError::InvalidValue)?;
        Ok(file.face)
    }
}
