use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::{info, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Serializer;

use crate::state::GfxConfig;

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &data_bytes)?;
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!("Loading {}", path.display());
    let data_bytes = fs::read(path)?;
    let data: T = serde_json::from_slice(&data_bytes)?;
    Ok(data)
}

pub fn default_config_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "FantasyGfx")
        .context("Unable to open config directory.")?;
    Ok(project_dirs.config_dir().join("config.json"))
}

/// Missing files give the default config; unreadable ones are errors.
pub fn load_config(path: &Path) -> Result<GfxConfig> {
    if !path.exists() {
        warn!("No config at {}, using defaults", path.display());
        return Ok(GfxConfig::default());
    }
    load_json(path).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn save_config(path: &Path, config: &GfxConfig) -> Result<()> {
    save_json(path, config)
}
