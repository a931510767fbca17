//! The API facade: one entry point per operation, generic over the storage
//! backend. The CLI wires a [`FileStore`](crate::store::fs::FileStore) in;
//! tests wire an [`InMemoryStore`](crate::store::memory::InMemoryStore).

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::LinkRecord;
use crate::selector::Selector;
use crate::store::StoreBackend;

pub struct StashApi<S: StoreBackend> {
    store: S,
}

impl<S: StoreBackend> StashApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the backing store has been created yet (first-run detection).
    pub fn store_exists(&self) -> bool {
        self.store.exists()
    }

    /// First-run setup: create the store with defaults. Never overwrites.
    pub fn initialize(&mut self) -> Result<CmdResult> {
        self.store.initialize()?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Database created!"));
        Ok(result)
    }

    /// Clears the pending-onboarding flag and persists. The flag is never
    /// set back to true afterwards.
    pub fn complete_onboarding(&mut self) -> Result<()> {
        let mut store = self.store.load()?;
        if store.first_launch_pending {
            store.first_launch_pending = false;
            self.store.save(&store)?;
        }
        Ok(())
    }

    pub fn add_link(&mut self, record: LinkRecord) -> Result<CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn list_links(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn copy_link(&self, selector: &mut dyn Selector) -> Result<CmdResult> {
        commands::copy::run(&self.store, selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn onboarding_clears_the_flag_once() {
        let mut api = StashApi::new(InMemoryStore::new());
        assert!(!api.store_exists());

        api.initialize().unwrap();
        assert!(api.store_exists());

        api.complete_onboarding().unwrap();
        let store = api.store.load().unwrap();
        assert!(!store.first_launch_pending);

        // A second completion is a no-op, not a reset.
        api.complete_onboarding().unwrap();
        assert!(!api.store.load().unwrap().first_launch_pending);
    }

    #[test]
    fn add_then_list_round_trip() {
        let mut api = StashApi::new(InMemoryStore::with_links::<_, &str>([]));
        api.add_link(LinkRecord::new("Home", "https://example.com"))
            .unwrap();

        let result = api.list_links().unwrap();
        assert_eq!(result.listed_links.len(), 1);
        assert_eq!(result.listed_links[0].label, "Home");
    }
}
