//! User settings, loaded from a JSON file in the platform config dir.
//!
//! Missing or unreadable settings fall back to defaults; the app never
//! fails to start because of its config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Root for image references that start with "/". Defaults to a
    /// `resources` directory next to the working directory.
    #[serde(default)]
    pub resources_dir: Option<PathBuf>,
    /// Dataset opened at startup when no path is given on the command
    /// line.
    #[serde(default)]
    pub default_dataset: Option<PathBuf>,
}

impl Settings {
    /// Platform config file location, e.g.
    /// `~/.config/dataviewer/settings.json` on Linux.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dataviewer").join("settings.json"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid settings file");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Effective resources root for "/" image references.
    pub fn resources_root(&self) -> PathBuf {
        self.resources_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("resources"))
    }
}
