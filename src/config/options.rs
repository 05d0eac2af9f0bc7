// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::FlagsError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub icons: IconSource,
    pub prefs_path: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            icons: IconSource::default(),
            prefs_path: PathBuf::from(STORE_DIR).join(PREFS_FILE),
        }
    }
}

impl AppOptions {
    pub fn default_path() -> PathBuf {
        PathBuf::from(STORE_DIR).join(OPTIONS_FILE)
    }

    /// Options from `.store/options.json`, or defaults when absent.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(_) => {
                logd!("Options: {} not found, using defaults", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(opts) => opts,
            Err(e) => {
                loge!("Options: ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    /// Shown on each injected multiplayer row.
    Info,
    /// Shown on the toggle menu header.
    Toggle,
}

impl Icon {
    pub fn inline_b64(self) -> &'static str {
        match self {
            Icon::Info => INFO_ICON_B64,
            Icon::Toggle => TOGGLE_ICON_B64,
        }
    }

    /// Raw PNG bytes of the built-in icon.
    pub fn png_bytes(self) -> Result<Vec<u8>, FlagsError> {
        Ok(STANDARD.decode(self.inline_b64())?)
    }
}

/// Where row and menu icons come from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IconSource {
    /// PNGs baked into the binary, emitted as data URIs.
    #[default]
    Inline,
    /// Icons served from elsewhere.
    Hosted { info: String, toggle: String },
}

impl IconSource {
    /// Value for an `<img src=…>` (or an egui image URI).
    pub fn src(&self, icon: Icon) -> String {
        match self {
            IconSource::Inline => join!("data:image/png;base64,", icon.inline_b64()),
            IconSource::Hosted { info, toggle } => match icon {
                Icon::Info => info.clone(),
                Icon::Toggle => toggle.clone(),
            },
        }
    }
}
