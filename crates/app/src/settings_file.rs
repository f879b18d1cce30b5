//! Persisted user settings. The maze itself is never written to disk; only
//! the knobs a player would expect to survive a restart.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::frame_input::DEFAULT_MOUSE_SENSITIVITY;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SettingsFile {
    pub format_version: u32,
    pub mouse_sensitivity: f32,
    pub last_seed: u64,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            last_seed: 0,
        }
    }
}

impl SettingsFile {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME)
            .map(|dirs| dirs.data_dir().join("settings.json"))
    }

    /// Write via a temporary sibling and rename, so a crash mid-write never
    /// leaves a truncated settings file behind.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn json_roundtrip_preserves_every_field() {
        let settings =
            SettingsFile { format_version: 1, mouse_sensitivity: 0.005, last_seed: 12_345 };

        let json = serde_json::to_string(&settings).unwrap();
        let decoded: SettingsFile = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, decoded);
    }

    #[test]
    fn atomic_write_then_load_and_no_tmp_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = SettingsFile { last_seed: 99, ..SettingsFile::default() };
        settings.write_atomic(&path).unwrap();
        assert!(path.exists());

        let loaded = SettingsFile::load(&path).unwrap();
        assert_eq!(settings, loaded);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn corrupt_file_reports_invalid_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let error = SettingsFile::load(&path).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn default_carries_the_input_boundary_sensitivity() {
        assert_eq!(SettingsFile::default().mouse_sensitivity, DEFAULT_MOUSE_SENSITIVITY);
    }
}
