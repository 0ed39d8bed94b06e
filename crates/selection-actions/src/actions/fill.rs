//! Fill action

use async_trait::async_trait;

use crate::{
    dispatcher::ElementAction,
    errors::{ActionError, Step},
    ports::ElementHandle,
    selection::{ActionKind, Selection},
};

/// Clear each element and enter `text`.
///
/// If entering text fails the element stays cleared.
#[derive(Debug, Clone)]
pub struct Fill {
    pub text: String,
}

impl Fill {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl ElementAction for Fill {
    fn kind(&self) -> ActionKind {
        ActionKind::Fill
    }

    async fn apply(
        &self,
        selection: &Selection,
        element: &dyn ElementHandle,
    ) -> Result<(), ActionError> {
        element.clear().await.map_err(selection.fail(Step::Clear))?;
        element
            .set_value(&self.text)
            .await
            .map_err(selection.fail(Step::EnterText))
    }
}
