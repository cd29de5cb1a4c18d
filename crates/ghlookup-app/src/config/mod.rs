//! Configuration file parsing for ghlookup
//!
//! Supports:
//! - `~/.config/ghlookup/config.toml` - Global settings
//! - `--config PATH` - Explicit settings file

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, resolve_config_path, CONFIG_FILENAME,
};
pub use types::*;
