//! The `#<label>:<url>` line parser.
//!
//! A link line looks like `#Link Name:https://your-link-url`. The label is
//! everything strictly between the leading `#` and the FIRST `:`; the URL is
//! everything after that `:` to end of line, with no further trimming (a `:`
//! inside the URL is fine, which is what makes `https://...` work at all).
//!
//! `parse` is deliberately the minimal historical syntax check: it accepts
//! `"#:url"` and `"#label:"`. Empty segments are rejected one layer up by
//! [`LinkRecord::validate`], which the add flow runs before touching the
//! store. Keeping `parse` a pure split makes it independently testable
//! without any file or terminal I/O.

use crate::error::{Result, StashError};
use crate::model::LinkRecord;

/// Decomposes one raw line into a [`LinkRecord`].
///
/// Fails with [`StashError::Syntax`] when the line does not start with `#`
/// or contains no `:` after it.
pub fn parse(raw: &str) -> Result<LinkRecord> {
    let body = raw
        .strip_prefix('#')
        .ok_or_else(|| StashError::Syntax(raw.to_string()))?;
    let (label, url) = body
        .split_once(':')
        .ok_or_else(|| StashError::Syntax(raw.to_string()))?;
    Ok(LinkRecord::new(label, url))
}

/// Drives the re-prompt loop for `new`: feeds lines through [`parse`] and
/// [`LinkRecord::validate`] until one passes, calling `on_reject` for each
/// rejected line. Returns `None` when the input runs out before a valid
/// line, which is how EOF cancels the flow.
///
/// The loop is a pure function over an injected iterator so tests can feed
/// it a finite sequence of inputs instead of a terminal.
pub fn first_valid_record<I, F>(lines: I, mut on_reject: F) -> Option<LinkRecord>
where
    I: IntoIterator<Item = String>,
    F: FnMut(&StashError),
{
    for line in lines {
        match parse(&line).and_then(|record| {
            record.validate()?;
            Ok(record)
        }) {
            Ok(record) => return Some(record),
            Err(err) => on_reject(&err),
        }
    }
    None
}
