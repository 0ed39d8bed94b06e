//! Per-element dispatch

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::errors::ActionError;
use crate::ports::ElementHandle;
use crate::selection::{ActionKind, Selection};

/// Unit of work applied to each element a selection resolves to.
///
/// Implementations embed the selection description in their own errors,
/// since only they know which sub-step failed.
#[async_trait]
pub trait ElementAction: Send + Sync {
    fn kind(&self) -> ActionKind;

    async fn apply(
        &self,
        selection: &Selection,
        element: &dyn ElementHandle,
    ) -> Result<(), ActionError>;
}

/// Resolve `selection` and apply `action` to every match in resolver order.
///
/// Elements are handled strictly one after another. The first failure is
/// returned unchanged and the remaining elements are left untouched; effects
/// on elements already handled are not rolled back. Zero matches is success.
#[instrument(skip_all, fields(action = %action.kind(), selection = %selection))]
pub async fn for_each_element(
    selection: &Selection,
    action: &dyn ElementAction,
) -> Result<(), ActionError> {
    let elements = selection
        .resolver()
        .resolve(selection.chain())
        .await
        .map_err(|source| ActionError::Resolution {
            selection: selection.to_string(),
            source,
        })?;
    debug!(count = elements.len(), "resolved selection");

    for element in &elements {
        action.apply(selection, element.as_ref()).await?;
    }
    Ok(())
}
