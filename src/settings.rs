//! Settings file: emoji palette, form field ids and theme overrides.
//!
//! Stored as JSON under the per-user cache directory. A missing or broken file
//! never stops the picker; callers fall back to [`Settings::default`].

use crate::picker::{DEFAULT_EMOJIS, SELECTED_EMOJI_FIELD_ID, SELECTED_EMOJI_FIELD_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".emoji-picker";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_emojis")]
    pub emojis: Vec<String>,
    #[serde(default)]
    pub form: FormSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            emojis: default_emojis(),
            form: FormSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

fn default_emojis() -> Vec<String> {
    DEFAULT_EMOJIS.iter().map(|e| e.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Element id of the hidden field the selector writes to.
    #[serde(default = "default_field_id")]
    pub field_id: String,
    /// Name the field is submitted under.
    #[serde(default = "default_field_name")]
    pub field_name: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            field_id: default_field_id(),
            field_name: default_field_name(),
        }
    }
}

fn default_field_id() -> String {
    SELECTED_EMOJI_FIELD_ID.to_string()
}

fn default_field_name() -> String {
    SELECTED_EMOJI_FIELD_NAME.to_string()
}

/// Colour overrides: `#rrggbb` or a named ANSI colour. Unset or unparsable
/// entries keep the built-in colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_hover_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_ring: Option<String>,
}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "cannot read settings: {err}"),
            SettingsError::Parse(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    let mut settings: Settings = serde_json::from_str(&data)?;
    if settings.emojis.is_empty() {
        tracing::warn!(path = %path.display(), "settings list no emojis, using defaults");
        settings.emojis = default_emojis();
    }
    Ok(settings)
}

/// Loads `path` (or the default settings file), falling back to defaults on
/// any error.
pub fn load_or_default(path: Option<&Path>) -> Settings {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match ensure_settings_file() {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(error = %err, "no settings file, using defaults");
                return Settings::default();
            }
        },
    };

    match load_settings(&path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), emojis = settings.emojis.len(), "settings loaded");
            settings
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings ignored, using defaults");
            Settings::default()
        }
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// Writes a default settings file if none exists yet.
pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "cannot determine settings directory")
    })?;
    write_default_if_missing(&path)?;
    Ok(path)
}

fn write_default_if_missing(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&Settings::default()).map_err(io::Error::other)?;
    std::fs::write(path, content)
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_cache_dir()
        .map(|dir| dir.join(APP_DIR).join(LOG_DIR))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot determine log directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
