use crate::model::LinkRecord;

pub mod add;
pub mod copy;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured outcome of one command. The CLI layer decides how to render
/// it; commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Links to display, in insertion order (set by `list`).
    pub listed_links: Vec<LinkRecord>,
    /// The link whose URL the caller should place on the clipboard
    /// (set by `copy` when a selection was made).
    pub copied: Option<LinkRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_links(mut self, links: Vec<LinkRecord>) -> Self {
        self.listed_links = links;
        self
    }

    pub fn with_copied(mut self, record: LinkRecord) -> Self {
        self.copied = Some(record);
        self
    }
}
