use super::error::{Result, TodoError};
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "todo";

/// Platform-specific application data directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Result<Self> {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").map(PathBuf::from),
            "macos" => var("HOME").map(|home| Path::new(&home).join("Library").join("Application Support")),
            _ => var("HOME").map(|home| Path::new(&home).join(".local").join("share")),
        }
        .map_err(|_| TodoError::Config("cannot resolve the application data directory".into()))?;

        Ok(Self::at(base_path.join(APP_NAME)))
    }

    /// Uses `base_path` directly, bypassing platform resolution.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Joins `file_name` onto the base directory without touching the filesystem.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// Like [`DataStorage::path`], but creates the base directory first.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.path(file_name))
    }
}
