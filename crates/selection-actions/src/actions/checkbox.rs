//! Check / uncheck action

use async_trait::async_trait;
use tracing::debug;

use crate::{
    dispatcher::ElementAction,
    errors::{ActionError, Step},
    ports::ElementHandle,
    selection::{ActionKind, Selection},
};

const CHECKBOX_TYPE: &str = "checkbox";

/// Bring each checkbox to `checked`, clicking only when its state differs.
///
/// There is no set-state primitive, so this reads the state and toggles it
/// with a click. Targets must be exactly `type="checkbox"`.
#[derive(Debug, Clone, Copy)]
pub struct SetChecked {
    pub checked: bool,
}

impl SetChecked {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }
}

#[async_trait]
impl ElementAction for SetChecked {
    fn kind(&self) -> ActionKind {
        if self.checked {
            ActionKind::Check
        } else {
            ActionKind::Uncheck
        }
    }

    async fn apply(
        &self,
        selection: &Selection,
        element: &dyn ElementHandle,
    ) -> Result<(), ActionError> {
        let element_type = element
            .attribute("type")
            .await
            .map_err(selection.fail(Step::ReadType))?;

        if element_type.as_deref() != Some(CHECKBOX_TYPE) {
            return Err(ActionError::NotCheckbox {
                selection: selection.to_string(),
                found: element_type,
            });
        }

        let selected = element
            .is_selected()
            .await
            .map_err(selection.fail(Step::ReadState))?;

        if selected == self.checked {
            debug!(element = %element.id(), checked = self.checked, "checkbox already in state");
            return Ok(());
        }

        element.click().await.map_err(selection.fail(Step::Click))
    }
}
