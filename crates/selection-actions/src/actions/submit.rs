//! Submit action

use async_trait::async_trait;

use crate::{
    dispatcher::ElementAction,
    errors::{ActionError, Step},
    ports::ElementHandle,
    selection::{ActionKind, Selection},
};

/// Submit the form owning each matched element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Submit;

#[async_trait]
impl ElementAction for Submit {
    fn kind(&self) -> ActionKind {
        ActionKind::Submit
    }

    async fn apply(
        &self,
        selection: &Selection,
        element: &dyn ElementHandle,
    ) -> Result<(), ActionError> {
        element.submit().await.map_err(selection.fail(Step::Submit))
    }
}
