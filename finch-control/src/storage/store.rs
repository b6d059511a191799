//! Program store
//!
//! Saved programs live in one directory as `<name>.txt`. Saves go through
//! a temp file and a rename, so a failed save never leaves a half-written
//! program behind. Loads read the whole file before decoding, so a failed
//! load never hands back a partial list. Only I/O failures fail a load;
//! undecodable content, including invalid UTF-8, is skipped per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use finch_core::program::CommandList;
use finch_protocol::{deserialize, serialize, Decoded};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::name::ProgramName;

/// Extension of saved programs
pub const PROGRAM_EXTENSION: &str = "txt";

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("program directory {} does not exist", .path.display())]
    DirectoryMissing { path: PathBuf },

    #[error("no saved program at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}", .path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Directory of saved programs
#[derive(Debug, Clone)]
pub struct ProgramStore {
    dir: PathBuf,
}

impl ProgramStore {
    /// Store rooted at `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a program is stored under
    pub fn path_for(&self, name: &ProgramName) -> PathBuf {
        self.dir.join(name.file_name())
    }

    /// Save `list` as `name`, replacing any previous version
    pub fn save(&self, name: &ProgramName, list: &CommandList) -> Result<PathBuf, StorageError> {
        let path = self.path_for(name);

        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Unwritable {
            path: self.dir.clone(),
            source,
        })?;

        let temp_path = path.with_extension("tmp");
        let write = fs::write(&temp_path, serialize(list))
            .and_then(|()| fs::rename(&temp_path, &path));

        if let Err(source) = write {
            // Best effort, the original error is what matters
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::Unwritable { path, source });
        }

        info!("Saved {} entries to {}", list.len(), path.display());
        Ok(path)
    }

    /// Load and decode `name`
    pub fn load(&self, name: &ProgramName) -> Result<Decoded, StorageError> {
        if !self.dir.is_dir() {
            return Err(StorageError::DirectoryMissing {
                path: self.dir.clone(),
            });
        }

        let path = self.path_for(name);
        let bytes = fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StorageError::NotFound { path: path.clone() }
            } else {
                StorageError::Unreadable {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        // Invalid UTF-8 becomes U+FFFD, which no operation name contains,
        // so the affected line is skipped like any other malformed line
        let text = String::from_utf8_lossy(&bytes);
        let decoded = deserialize(&text);
        if decoded.is_clean() {
            info!("Loaded {} entries from {}", decoded.list.len(), path.display());
        } else {
            warn!(
                "Loaded {} entries from {}, skipped {} lines",
                decoded.list.len(),
                path.display(),
                decoded.skipped_count()
            );
        }
        Ok(decoded)
    }

    /// Saved program names, sorted
    ///
    /// A directory that does not exist yet holds no programs.
    pub fn list(&self) -> Result<Vec<ProgramName>, StorageError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Unreadable {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StorageError::Unreadable {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(PROGRAM_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match ProgramName::new(stem) {
                Ok(name) => names.push(name),
                Err(e) => debug!("Ignoring {}: {}", path.display(), e),
            }
        }
        names.sort();
        Ok(names)
    }
}
