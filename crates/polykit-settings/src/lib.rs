//! PolyKit Settings Crate
//!
//! Handles editor configuration: loading and saving TOML/JSON config files,
//! validation, and the platform config location.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, AlgorithmDefaults, ColorSettings, Config, HistorySettings,
    InteractionSettings, RunnerSettings, ViewSettings,
};
pub use error::{SettingsError, SettingsResult};
