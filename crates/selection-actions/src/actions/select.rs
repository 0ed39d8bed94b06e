//! Select action - click options by visible text

use async_trait::async_trait;
use tracing::debug;

use crate::{
    dispatcher::ElementAction,
    errors::{ActionError, Step},
    ports::ElementHandle,
    query::option_query,
    selection::{ActionKind, Selection},
};

/// Click every direct `<option>` child whose normalized text equals `text`.
///
/// All matching options are clicked, so a multi-select with duplicate labels
/// gets each of them. A parent with no matching option fails.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub text: String,
}

impl SelectOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl ElementAction for SelectOption {
    fn kind(&self) -> ActionKind {
        ActionKind::Select
    }

    async fn apply(
        &self,
        selection: &Selection,
        element: &dyn ElementHandle,
    ) -> Result<(), ActionError> {
        let query = option_query(&self.text);
        let options = element
            .find_within(&query)
            .await
            .map_err(selection.fail(Step::FindOptions))?;

        if options.is_empty() {
            return Err(ActionError::NoMatchingOption {
                text: self.text.clone(),
                selection: selection.to_string(),
            });
        }
        debug!(element = %element.id(), count = options.len(), "matched options");

        for option in &options {
            option.click().await.map_err(|source| ActionError::Primitive {
                step: Step::ClickOption {
                    text: self.text.clone(),
                },
                selection: selection.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}
