use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// String-keyed, string-valued persistence, the shape browser local storage
/// hands a web view. Implementations only move strings around; the store
/// decides what the strings mean.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// Backend for tests and throwaway sessions; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Backend keeping every entry in one JSON object file.
///
/// The file is read once at open; a file that cannot be read or parsed
/// starts the session with an empty map instead of failing. Every write
/// rewrites the whole file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileBackend {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Some(entries) => entries,
            None => {
                if path.exists() {
                    warn!("unreadable storage file {}, starting empty", path.display());
                }
                HashMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_entries(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.entries).map_err(io::Error::from)?;
        std::fs::write(&self.path, data)
    }
}

fn read_entries(path: &Path) -> Option<HashMap<String, String>> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write_entries()
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        self.write_entries()
    }
}
