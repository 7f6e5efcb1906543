//! Face configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How often the host delivers clock ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TickUnit {
    /// Once per minute; the face only changes on the minute
    #[default]
    Minute,
    /// Once per second
    Second,
}

/// Watchface configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FaceConfig {
    /// Up/down buttons step a debug clock instead of being ignored
    pub debug_input: bool,
    /// Tick subscription requested from the host
    pub tick_unit: TickUnit,
    /// Render the current time as soon as the face is loaded,
    /// without waiting for the first tick
    pub show_on_load: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            debug_input: false,
            tick_unit: TickUnit::Minute,
            show_on_load: true,
        }
    }
}

impl FaceConfig {
    /// Configuration for checking every reading by hand
    pub fn debug() -> Self {
        Self {
            debug_input: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FaceConfig::default();
        assert!(!config.debug_input);
        assert_eq!(config.tick_unit, TickUnit::Minute);
        assert!(config.show_on_load);
    }

    #[test]
    fn test_debug_preset() {
        let config = FaceConfig::debug();
        assert!(config.debug_input);
        assert_eq!(config.tick_unit, TickUnit::Minute);
    }
}
