//! Sinks the log router appends category lines to.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::Category;
use crate::error_handling::RouteError;

/// Capability to append a result line to a per-domain file of a category.
pub trait RouteSink {
    fn append(&self, category: Category, domain: &str, line: &str) -> Result<(), RouteError>;
}

/// Writes `<root>/<category>/<domain>.csv`, creating directories and files on demand.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file a line for `domain` in `category` goes to.
    pub fn file_for(&self, category: Category, domain: &str) -> PathBuf {
        self.root
            .join(category.to_string())
            .join(format!("{domain}.csv"))
    }
}

impl RouteSink for DirectorySink {
    fn append(&self, category: Category, domain: &str, line: &str) -> Result<(), RouteError> {
        let dir = self.root.join(category.to_string());
        fs::create_dir_all(&dir).map_err(|source| RouteError::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;

        let path = self.file_for(category, domain);
        let append_err = |source: std::io::Error| RouteError::Append {
            path: path.display().to_string(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(append_err)?;
        file.write_all(format!("{line}\n").as_bytes())
            .map_err(append_err)
    }
}

/// Records appended lines in memory.
#[derive(Debug, Default)]
pub struct MemoryRouteSink {
    entries: Mutex<Vec<(Category, String, String)>>,
}

impl MemoryRouteSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(category, domain, line)` triples in append order.
    pub fn entries(&self) -> Vec<(Category, String, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl RouteSink for MemoryRouteSink {
    fn append(&self, category: Category, domain: &str, line: &str) -> Result<(), RouteError> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((category, domain.to_string(), line.to_string()));
        Ok(())
    }
}
