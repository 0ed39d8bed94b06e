//! Semantic actions
//!
//! Six actions, each applied through [`for_each_element`]:
//! 1. click - click every match
//! 2. double_click - move the session pointer to each match and double-click
//! 3. fill - clear each match and enter text
//! 4. check/uncheck - bring each checkbox to the requested state
//! 5. select - click every direct option with the requested text
//! 6. submit - submit each match

mod checkbox;
mod click;
mod double_click;
mod fill;
mod select;
mod submit;

pub use checkbox::*;
pub use click::*;
pub use double_click::*;
pub use fill::*;
pub use select::*;
pub use submit::*;

use async_trait::async_trait;

use crate::{dispatcher::for_each_element, errors::ActionError, selection::Selection};

/// Semantic actions exposed on a selection.
///
/// Every action re-resolves the selection, is a no-op on zero matches and
/// stops at the first failing element without undoing earlier ones.
#[async_trait]
pub trait SelectionActions: Send + Sync {
    async fn click(&self) -> Result<(), ActionError>;

    async fn double_click(&self) -> Result<(), ActionError>;

    async fn fill(&self, text: &str) -> Result<(), ActionError>;

    /// Ensure every match is checked.
    ///
    /// State is read, then toggled with a click when it differs. A document
    /// change between the read and the click is not detected.
    async fn check(&self) -> Result<(), ActionError>;

    /// Ensure every match is unchecked. Same read-then-click caveat as
    /// [`SelectionActions::check`].
    async fn uncheck(&self) -> Result<(), ActionError>;

    /// Click every direct `<option>` child whose normalized text equals
    /// `text`. A matched parent without such an option is an error.
    async fn select(&self, text: &str) -> Result<(), ActionError>;

    async fn submit(&self) -> Result<(), ActionError>;
}

#[async_trait]
impl SelectionActions for Selection {
    async fn click(&self) -> Result<(), ActionError> {
        for_each_element(self, &Click).await
    }

    async fn double_click(&self) -> Result<(), ActionError> {
        let action = DoubleClick::new(self.options().pointer_offset);
        for_each_element(self, &action).await
    }

    async fn fill(&self, text: &str) -> Result<(), ActionError> {
        for_each_element(self, &Fill::new(text)).await
    }

    async fn check(&self) -> Result<(), ActionError> {
        for_each_element(self, &SetChecked::new(true)).await
    }

    async fn uncheck(&self) -> Result<(), ActionError> {
        for_each_element(self, &SetChecked::new(false)).await
    }

    async fn select(&self, text: &str) -> Result<(), ActionError> {
        for_each_element(self, &SelectOption::new(text)).await
    }

    async fn submit(&self) -> Result<(), ActionError> {
        for_each_element(self, &Submit).await
    }
}
