use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StashError {
    #[error("stash database not found at {0}")]
    StoreMissing(PathBuf),

    #[error("stash database at {path} is broken: {reason}")]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("could not write stash database: {0}")]
    StoreWrite(#[source] std::io::Error),

    #[error("wrong link syntax: {0}")]
    Syntax(String),

    #[error("cancelled")]
    Cancelled,

    #[error("'{0}' is not finished yet")]
    NotImplemented(&'static str),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("selection failed: {0}")]
    Selection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StashError>;
