//! Double-click action

use async_trait::async_trait;
use tracing::debug;

use crate::{
    dispatcher::ElementAction,
    errors::{ActionError, Step},
    ports::ElementHandle,
    selection::{ActionKind, PointerOffset, Selection},
};

/// Move the session pointer onto each element, then double-click there.
///
/// The protocol double-clicks at the pointer position rather than on an
/// element, so this depends on session-wide pointer state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleClick {
    pub offset: Option<PointerOffset>,
}

impl DoubleClick {
    pub fn new(offset: Option<PointerOffset>) -> Self {
        Self { offset }
    }
}

#[async_trait]
impl ElementAction for DoubleClick {
    fn kind(&self) -> ActionKind {
        ActionKind::DoubleClick
    }

    async fn apply(
        &self,
        selection: &Selection,
        element: &dyn ElementHandle,
    ) -> Result<(), ActionError> {
        let session = selection.session();
        debug!(element = %element.id(), offset = ?self.offset, "moving pointer");
        session
            .move_to(element, self.offset)
            .await
            .map_err(selection.fail(Step::MoveMouse))?;
        session
            .double_click()
            .await
            .map_err(selection.fail(Step::DoubleClick))
    }
}
