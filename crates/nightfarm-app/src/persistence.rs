//! JSON config and save files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use nightfarm_core::config::SimConfig;
use nightfarm_core::state::SaveState;

use crate::error::AppError;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let json = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a simulation config. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig, AppError> {
    let config: SimConfig = read_json(path)?;
    config.validate()?;
    Ok(config)
}

pub fn load_from_file(path: &Path) -> Result<SaveState, AppError> {
    read_json(path)
}

/// Write a save file, creating its directory if needed.
pub fn save_to_file(path: &Path, save: &SaveState) -> Result<(), AppError> {
    let io_error = |source| AppError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_error)?;
    }
    let json = serde_json::to_string_pretty(save).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_error)
}
