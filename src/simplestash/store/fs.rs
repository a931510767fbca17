use super::StoreBackend;
use crate::error::{Result, StashError};
use crate::model::LinkStore;
use std::fs;
use std::path::PathBuf;

/// File-backed store: the whole stash in one YAML file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn corrupt(&self, reason: impl ToString) -> StashError {
        StashError::StoreCorrupt {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl StoreBackend for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<LinkStore> {
        if !self.path.exists() {
            return Err(StashError::StoreMissing(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        // serde rejects a document missing `firstlaunch` or `links`, which
        // covers the hand-edited-and-broken case in one place.
        let store: LinkStore = serde_yaml::from_str(&content).map_err(|e| self.corrupt(e))?;
        Ok(store)
    }

    fn save(&mut self, store: &LinkStore) -> Result<()> {
        let content = serde_yaml::to_string(store).map_err(|e| self.corrupt(e))?;
        fs::write(&self.path, content).map_err(StashError::StoreWrite)?;
        Ok(())
    }

    fn initialize(&mut self) -> Result<LinkStore> {
        if self.exists() {
            return self.load();
        }
        let store = LinkStore::default();
        self.save(&store)?;
        Ok(store)
    }
}
