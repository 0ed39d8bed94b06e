//! Click action

use async_trait::async_trait;

use crate::{
    dispatcher::ElementAction,
    errors::{ActionError, Step},
    ports::ElementHandle,
    selection::{ActionKind, Selection},
};

/// Click each matched element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Click;

#[async_trait]
impl ElementAction for Click {
    fn kind(&self) -> ActionKind {
        ActionKind::Click
    }

    async fn apply(
        &self,
        selection: &Selection,
        element: &dyn ElementHandle,
    ) -> Result<(), ActionError> {
        element.click().await.map_err(selection.fail(Step::Click))
    }
}
