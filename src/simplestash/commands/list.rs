use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::LinkRecord;
use crate::store::StoreBackend;

/// Reads the store and returns all links in insertion order. Never mutates.
pub fn run<S: StoreBackend>(backend: &S) -> Result<CmdResult> {
    let store = backend.load()?;
    let listed: Vec<_> = store
        .links
        .iter()
        .map(|(label, url)| LinkRecord::new(label.clone(), url.clone()))
        .collect();

    let mut result = CmdResult::default().with_listed_links(listed);
    if result.listed_links.is_empty() {
        result.add_message(CmdMessage::info("No links stashed yet."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_links_in_insertion_order() {
        let store = InMemoryStore::with_links([("Zulu", "u1"), ("Alpha", "u2")]);
        let result = run(&store).unwrap();
        let labels: Vec<_> = result
            .listed_links
            .iter()
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Zulu", "Alpha"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_reports_info_message() {
        let store = InMemoryStore::with_links::<_, &str>([]);
        let result = run(&store).unwrap();
        assert!(result.listed_links.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn listing_twice_is_identical() {
        let store = InMemoryStore::with_links([("A", "u1"), ("B", "u2")]);
        let first = run(&store).unwrap();
        let second = run(&store).unwrap();
        assert_eq!(first.listed_links, second.listed_links);
    }
}
