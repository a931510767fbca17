use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::LinkRecord;
use crate::store::StoreBackend;

/// Inserts (or overwrites) one validated link and persists the store.
///
/// Overwriting an existing label replaces its URL in place; the label keeps
/// its original position in the listing.
pub fn run<S: StoreBackend>(backend: &mut S, record: LinkRecord) -> Result<CmdResult> {
    record.validate()?;
    let mut store = backend.load()?;
    store.links.insert(record.label.clone(), record.url.clone());
    backend.save(&store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Link added!"));
    Ok(result)
}
