//! Editor settings, persisted as JSON in the platform config directory.
//!
//! Every field has a default, so a partial or empty settings file is valid.
//! A missing file means "use the defaults"; a malformed one is an error that
//! [`EditorSettings::load_or_default`] downgrades to a warning.

use crate::constants::{
    DUPLICATE_OFFSET, ESTIMATED_TEXT_SIZE, MARQUEE_MIN_SIZE, MAX_ZOOM, MIN_ZOOM,
    NEW_ITEM_ORIGIN, SNAP_THRESHOLD,
};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SETTINGS_DIR: &str = "labelboard";
const SETTINGS_FILE: &str = "settings.json";

/// Tunables of the canvas engine and item store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
    /// Maximum distance (canvas units) at which a reference snaps
    pub snap_threshold: f32,
    /// Marquee must be wider and taller than this to select
    pub marquee_min_size: f32,
    /// Assumed extent of a text item that has not been measured yet
    pub text_estimate: (f32, f32),
    /// Offset applied to duplicated items
    pub duplicate_offset: (f32, f32),
    /// Position of newly added items
    pub new_item_origin: (f32, f32),
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD,
            marquee_min_size: MARQUEE_MIN_SIZE,
            text_estimate: ESTIMATED_TEXT_SIZE,
            duplicate_offset: DUPLICATE_OFFSET,
            new_item_origin: NEW_ITEM_ORIGIN,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

impl EditorSettings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    /// Read settings from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            warn!("Failed to load settings from {}: {}", path.display(), err);
            Self::default()
        })
    }

    /// Read settings from the default location.
    pub fn load_default_location() -> SettingsResult<Self> {
        let path = default_settings_path().ok_or(SettingsError::NoConfigDir)?;
        Self::load(&path)
    }

    /// Write settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Zoom bounds, tolerating a reversed pair in the file.
    pub fn zoom_bounds(&self) -> (f32, f32) {
        if self.min_zoom <= self.max_zoom {
            (self.min_zoom, self.max_zoom)
        } else {
            (self.max_zoom, self.min_zoom)
        }
    }
}
