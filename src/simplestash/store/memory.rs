use super::StoreBackend;
use crate::error::{Result, StashError};
use crate::model::LinkStore;
use std::path::PathBuf;

/// In-memory store for tests. `None` models the not-yet-created file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: Option<LinkStore>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already went through onboarding, pre-seeded with pairs.
    pub fn with_links<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut store = LinkStore {
            first_launch_pending: false,
            links: Default::default(),
        };
        for (label, url) in pairs {
            store.links.insert(label.into(), url.into());
        }
        Self {
            data: Some(store),
            saves: 0,
        }
    }

    /// Number of `save` calls, so tests can assert an operation never wrote.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StoreBackend for InMemoryStore {
    fn exists(&self) -> bool {
        self.data.is_some()
    }

    fn load(&self) -> Result<LinkStore> {
        self.data
            .clone()
            .ok_or_else(|| StashError::StoreMissing(PathBuf::from("<memory>")))
    }

    fn save(&mut self, store: &LinkStore) -> Result<()> {
        self.data = Some(store.clone());
        self.saves += 1;
        Ok(())
    }

    fn initialize(&mut self) -> Result<LinkStore> {
        if let Some(existing) = &self.data {
            return Ok(existing.clone());
        }
        let store = LinkStore::default();
        self.save(&store)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_until_initialized() {
        let mut store = InMemoryStore::new();
        assert!(!store.exists());
        assert!(matches!(store.load(), Err(StashError::StoreMissing(_))));

        store.initialize().unwrap();
        assert!(store.exists());
        assert!(store.load().unwrap().first_launch_pending);
    }

    #[test]
    fn initialize_keeps_existing_data() {
        let mut store = InMemoryStore::with_links([("A", "u1")]);
        let before = store.load().unwrap();
        assert_eq!(store.initialize().unwrap(), before);
    }
}
