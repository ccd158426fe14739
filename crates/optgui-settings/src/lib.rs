//! OptGUI Settings Crate
//!
//! Loads, validates and saves the application configuration, and turns it
//! into the tuning parameters the geometry kernel consumes.

pub mod config;
pub mod error;

pub use config::{Config, RenderSettings, SceneSettings, ViewSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
