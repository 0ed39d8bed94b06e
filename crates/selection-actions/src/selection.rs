//! Selection model

use std::fmt;
use std::sync::Arc;

use selectkit_core_types::{DriverError, SelectorChain};
use serde::{Deserialize, Serialize};

use crate::errors::{ActionError, Step};
use crate::ports::{ElementResolver, PointerSession};

/// Pixel offset from an element's centre used for pointer moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerOffset {
    pub x: i32,
    pub y: i32,
}

impl PointerOffset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Per-selection tweaks applied by the semantic actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOptions {
    /// Offset used when moving the pointer for a double-click; `None`
    /// targets the element centre.
    pub pointer_offset: Option<PointerOffset>,
}

/// The semantic actions a selection supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Click,
    DoubleClick,
    Fill,
    Check,
    Uncheck,
    Select,
    Submit,
    /// Caller-defined action dispatched through [`crate::for_each_element`]
    Custom(&'static str),
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Click => "click",
            ActionKind::DoubleClick => "double_click",
            ActionKind::Fill => "fill",
            ActionKind::Check => "check",
            ActionKind::Uncheck => "uncheck",
            ActionKind::Select => "select",
            ActionKind::Submit => "submit",
            ActionKind::Custom(name) => *name,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable, re-resolvable description of zero or more remote elements.
///
/// A selection never caches handles: every action resolves the chain again.
#[derive(Clone)]
pub struct Selection {
    chain: SelectorChain,
    resolver: Arc<dyn ElementResolver>,
    session: Arc<dyn PointerSession>,
    options: ActionOptions,
}

impl Selection {
    pub fn new(
        chain: SelectorChain,
        resolver: Arc<dyn ElementResolver>,
        session: Arc<dyn PointerSession>,
    ) -> Self {
        Self {
            chain,
            resolver,
            session,
            options: ActionOptions::default(),
        }
    }

    /// Build a selection from a driver that both resolves and owns the pointer.
    pub fn from_driver<D>(chain: SelectorChain, driver: Arc<D>) -> Self
    where
        D: ElementResolver + PointerSession + 'static,
    {
        let resolver: Arc<dyn ElementResolver> = driver.clone();
        let session: Arc<dyn PointerSession> = driver;
        Self::new(chain, resolver, session)
    }

    pub fn with_options(mut self, options: ActionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn chain(&self) -> &SelectorChain {
        &self.chain
    }

    pub fn options(&self) -> &ActionOptions {
        &self.options
    }

    pub fn resolver(&self) -> &dyn ElementResolver {
        self.resolver.as_ref()
    }

    pub fn session(&self) -> &dyn PointerSession {
        self.session.as_ref()
    }

    /// Map a driver failure at `step` into an error carrying this selection.
    pub fn fail(&self, step: Step) -> impl FnOnce(DriverError) -> ActionError + '_ {
        move |source| ActionError::Primitive {
            step,
            selection: self.to_string(),
            source,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("chain", &self.chain.to_string())
            .field("options", &self.options)
            .finish()
    }
}
