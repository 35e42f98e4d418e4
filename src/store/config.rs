//! Persisted directory configuration
//!
//! The directory holding the log segments survives restarts in a small
//! single-line file. The file holds at most one path and is always written
//! whole, never appended, so repeated reconfiguration cannot grow it.

use crate::core::error::{LoggerError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistence file used when none is configured.
pub const DEFAULT_PERSIST_FILE: &str = "persistLogger.txt";

/// Directory used when nothing was persisted yet. Also the name of the
/// logger-owned subdirectory created inside a reconfigured parent.
pub const DEFAULT_DIRECTORY: &str = "LoggerLogs";

/// Loads and saves the configured log directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    default_directory: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>, default_directory: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_directory: default_directory.into(),
        }
    }

    /// Location of the persistence file itself.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that applies while nothing is persisted.
    #[must_use]
    pub fn default_directory(&self) -> &Path {
        &self.default_directory
    }

    /// Read the persisted directory path.
    ///
    /// `Ok(None)` means nothing usable was persisted yet and the default
    /// directory applies; a missing persistence file is created empty on
    /// the way so the next run finds it. `Err` means the file could not be
    /// read or created; the caller falls back to the default and reports.
    pub fn load(&self) -> Result<Option<PathBuf>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let first_line = content.lines().next().unwrap_or("").trim();
                if first_line.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(PathBuf::from(first_line)))
                }
            }
            Err(source) if source.kind() == ErrorKind::NotFound => {
                fs::write(&self.path, "").map_err(|source| {
                    LoggerError::config_persist("creating", self.path.display().to_string(), source)
                })?;
                Ok(None)
            }
            Err(source) => Err(LoggerError::config_persist(
                "reading",
                self.path.display().to_string(),
                source,
            )),
        }
    }

    /// Overwrite the persisted path with `directory`.
    pub fn save(&self, directory: &Path) -> Result<()> {
        fs::write(&self.path, directory.display().to_string()).map_err(|source| {
            LoggerError::config_persist("writing", self.path.display().to_string(), source)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(
            dir.path().join(DEFAULT_PERSIST_FILE),
            dir.path().join(DEFAULT_DIRECTORY),
        )
    }

    #[test]
    fn test_load_creates_missing_file_and_yields_default() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        let loaded = store.load().expect("load");
        assert!(loaded.is_none());
        assert!(store.path().exists(), "persistence file should be created");
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
    }

    #[test]
    fn test_load_empty_file_yields_default() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        fs::write(store.path(), "").unwrap();

        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn test_load_returns_persisted_path() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        fs::write(store.path(), "/var/log/app/LoggerLogs").unwrap();

        let loaded = store.load().expect("load");
        assert_eq!(loaded, Some(PathBuf::from("/var/log/app/LoggerLogs")));
    }

    #[test]
    fn test_load_takes_first_line_only() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        fs::write(store.path(), "first/path\nsecond/path\n").unwrap();

        let loaded = store.load().expect("load");
        assert_eq!(loaded, Some(PathBuf::from("first/path")));
    }

    #[test]
    fn test_save_overwrites_never_appends() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        store.save(Path::new("one/LoggerLogs")).expect("save");
        store.save(Path::new("two/LoggerLogs")).expect("save");

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "two/LoggerLogs");
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let target = dir.path().join("elsewhere").join(DEFAULT_DIRECTORY);

        store.save(&target).expect("save");
        assert_eq!(store.load().expect("load"), Some(target));
    }

    #[test]
    fn test_load_error_when_path_is_a_directory() {
        let dir = TempDir::new().expect("temp dir");
        let store = ConfigStore::new(dir.path(), dir.path().join(DEFAULT_DIRECTORY));

        assert!(store.load().is_err());
    }
}
