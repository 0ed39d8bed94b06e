//! Collaborator ports
//!
//! The dispatcher only talks to the remote browser through these traits:
//! a resolver turning selector chains into element handles, the handles
//! themselves, and the session-level pointer.

use async_trait::async_trait;
use selectkit_core_types::{DriverError, ElementId, Selector, SelectorChain};

use crate::selection::PointerOffset;

/// Live reference to one remote DOM node.
///
/// A handle is only valid until the document mutates the node away; calls
/// on a stale handle fail with the driver's error.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    fn id(&self) -> &ElementId;

    async fn click(&self) -> Result<(), DriverError>;

    async fn clear(&self) -> Result<(), DriverError>;

    async fn set_value(&self, text: &str) -> Result<(), DriverError>;

    /// Read an attribute; `None` when the attribute is not present.
    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError>;

    async fn is_selected(&self) -> Result<bool, DriverError>;

    async fn submit(&self) -> Result<(), DriverError>;

    /// Resolve `selector` relative to this element, in document order.
    async fn find_within(&self, selector: &Selector) -> Result<ElementList, DriverError>;
}

pub type ElementList = Vec<Box<dyn ElementHandle>>;

/// Resolves a selector chain against the current document.
#[async_trait]
pub trait ElementResolver: Send + Sync {
    async fn resolve(&self, chain: &SelectorChain) -> Result<ElementList, DriverError>;
}

/// Session-scoped virtual pointer.
///
/// Pointer position is shared by everything using the session, so callers
/// must serialize pointer-dependent actions on the same session.
#[async_trait]
pub trait PointerSession: Send + Sync {
    /// Move the pointer to `element`, optionally offset from its centre.
    async fn move_to(
        &self,
        element: &dyn ElementHandle,
        offset: Option<PointerOffset>,
    ) -> Result<(), DriverError>;

    /// Double-click at the current pointer position.
    async fn double_click(&self) -> Result<(), DriverError>;
}
