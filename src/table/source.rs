use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::util::read_text_lossy;

/// Read-only access to the data directory.
pub trait DataSource {
    /// Names of the regular files in `dir`, sorted.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>>;

    fn exists(&self, path: &Path) -> bool;

    /// Decodes lossily; invalid UTF-8 never fails a read.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsDataSource;

impl DataSource for FsDataSource {
    fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let entries =
            fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

        for entry in entries {
            let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
            let path = entry.path();

            // Follows symlinks; dangling links and directories are skipped.
            if !path.is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => debug!(name = ?name, "skipping non UTF-8 file name"),
            }
        }

        names.sort();
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        read_text_lossy(path)
    }
}

/// The files in a data directory that feed the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredSources {
    pub table: Option<String>,
    pub lookup: Option<String>,
}

impl DiscoveredSources {
    /// Picks the first `.md` and the first `.csv` name from a listing.
    pub fn from_listing(names: &[String]) -> Self {
        Self {
            table: names.iter().find(|name| name.ends_with(".md")).cloned(),
            lookup: names.iter().find(|name| name.ends_with(".csv")).cloned(),
        }
    }
}
