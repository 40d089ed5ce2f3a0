use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use tracing::debug;

use super::assemble::assemble_groups;
use super::extract::CellParser;
use super::source::{DataSource, FsDataSource};
use crate::model::GroupsData;

/// Loads the groups data once and hands out the same value afterwards.
///
/// The first successful [`GroupsCache::load`] reads the data directory; every
/// later call returns the stored `Arc` without touching storage. The load
/// happens under the lock, so concurrent first calls read the directory only
/// once. A failed load leaves the cache empty.
#[derive(Debug)]
pub struct GroupsCache<S = FsDataSource> {
    source: S,
    data_dir: PathBuf,
    parser: CellParser,
    cached: Mutex<Option<Arc<GroupsData>>>,
}

impl GroupsCache<FsDataSource> {
    pub fn from_dir(data_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::new(FsDataSource, data_dir)
    }
}

impl<S: DataSource> GroupsCache<S> {
    pub fn new(source: S, data_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            source,
            data_dir: data_dir.into(),
            parser: CellParser::new()?,
            cached: Mutex::new(None),
        })
    }

    pub fn load(&self) -> Result<Arc<GroupsData>> {
        // The stored value is only ever replaced whole, so a poisoned lock
        // still guards a consistent state.
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(data) = cached.as_ref() {
            debug!(data_dir = %self.data_dir.display(), "groups data served from cache");
            return Ok(Arc::clone(data));
        }

        let data = Arc::new(assemble_groups(&self.source, &self.parser, &self.data_dir)?);
        *cached = Some(Arc::clone(&data));
        Ok(data)
    }

    pub fn is_loaded(&self) -> bool {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
