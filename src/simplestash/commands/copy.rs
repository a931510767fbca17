use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StashError};
use crate::model::LinkRecord;
use crate::selector::Selector;
use crate::store::StoreBackend;

/// Resolves one label to its URL via the selector. Never persists: copy is
/// a read-only operation.
///
/// An empty store is refused up front with a friendly message; the selector
/// is never shown zero options.
pub fn run<S: StoreBackend>(backend: &S, selector: &mut dyn Selector) -> Result<CmdResult> {
    let store = backend.load()?;
    if store.links.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(
            "No links to copy yet. Stash one with 'simplestash new' first.",
        ));
        return Ok(result);
    }

    let labels: Vec<String> = store.links.keys().cloned().collect();
    let choice = selector.select("Select the link you want to copy", &labels)?;
    let (label, url) = store
        .links
        .get_index(choice)
        .ok_or_else(|| StashError::Selection(format!("index {choice} is out of range")))?;

    Ok(CmdResult::default().with_copied(LinkRecord::new(label.clone(), url.clone())))
}
