//! Face configuration
//!
//! Types are always available; parsing from TOML needs the `toml` feature.

pub mod types;
#[cfg(feature = "toml")]
pub mod toml;

pub use types::*;
#[cfg(feature = "toml")]
pub use self::toml::ConfigError;
