//! Single-choice selection over stored labels.
//!
//! The mechanism is abstracted behind a trait so `copy` stays testable
//! without a terminal: production uses an arrow-key menu, tests use a
//! scripted picker.

use crate::error::{Result, StashError};
use dialoguer::{theme::ColorfulTheme, Select};

/// Blocks until the user picks one option or cancels.
///
/// Implementations must only return indexes within `options` and must be
/// given at least one option. Cancellation surfaces as
/// [`StashError::Cancelled`] so callers can abort without copying anything.
pub trait Selector {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize>;
}

/// Arrow-key terminal menu backed by dialoguer.
pub struct TermSelector;

impl Selector for TermSelector {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|e| StashError::Selection(e.to_string()))?
            .ok_or(StashError::Cancelled)
    }
}
