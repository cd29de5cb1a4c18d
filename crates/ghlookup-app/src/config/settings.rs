//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use ghlookup_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

const APP_DIR: &str = "ghlookup";

/// `{config_dir}/ghlookup/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Config file to read on start.
///
/// An explicitly requested file must exist; the default location may be
/// absent, in which case defaults apply.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.exists() => Ok(path),
        Some(path) => Err(Error::ConfigNotFound { path }),
        None => default_config_path()
            .ok_or_else(|| Error::config("no config directory on this platform, pass --config")),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `path`
///
/// Returns default settings if the file doesn't exist, can't be parsed, or
/// fails validation.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    let settings: Settings = match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                return Settings::default();
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            return Settings::default();
        }
    };

    if let Err(e) = settings.validate() {
        warn!("Ignoring {:?}: {}", path, e);
        return Settings::default();
    }

    debug!("Loaded settings from {:?}", path);
    settings
}

/// Write a commented default config to `path` if nothing is there yet
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write {}: {}", CONFIG_FILENAME, e)))?;

    info!("Created default config at {:?}", path);
    Ok(())
}

fn generate_default_config() -> String {
    let defaults = Settings::default();
    format!(
        r#"# ghlookup configuration

[api]
base_url = "{}"
timeout_secs = {}
# user_agent = "my-agent/1.0"   # Defaults to ghlookup/<version>

[ui]
load_avatars = {}               # Probe avatar images when a profile opens
"#,
        defaults.api.base_url, defaults.api.timeout_secs, defaults.ui.load_avatars
    )
}
