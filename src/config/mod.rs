//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file under the platform
//! config directory.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GalleryLens";

/// Side length, in logical pixels, of the thumbnails on the host grid.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 200.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Minimum horizontal travel for a swipe gesture to navigate.
    #[serde(default)]
    pub swipe_min_distance: Option<f32>,
    #[serde(default)]
    pub thumbnail_size: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            swipe_min_distance: Some(crate::lightbox::swipe::MIN_SWIPE_DISTANCE),
            thumbnail_size: Some(DEFAULT_THUMBNAIL_SIZE),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
