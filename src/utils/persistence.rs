//! JSON file helpers for the ~/.voyage/ directory.
//!
//! The game itself keeps no save data; only the config file and the log
//! directory live here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.voyage/ directory path, creating it if needed.
pub fn voyage_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".voyage");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.voyage/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(voyage_dir()?.join(filename))
}

/// Get ~/.voyage/logs/, creating it if needed.
pub fn log_dir() -> io::Result<PathBuf> {
    let dir = voyage_dir()?.join("logs");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Save a value as pretty-printed JSON to ~/.voyage/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    save_json_to(&save_path(filename)?, data)
}

/// Save a value as pretty-printed JSON at `path`.
pub fn save_json_to<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
