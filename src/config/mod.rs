//! Configuration loading and validation.

mod settings;

pub use settings::{Settings, SettingsError};
