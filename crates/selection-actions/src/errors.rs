//! Error types for selection actions

use selectkit_core_types::DriverError;
use thiserror::Error;

/// Broad classification of an [`ActionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The selection itself could not be resolved
    Resolution,
    /// A semantic precondition failed before any mutation
    Validation,
    /// A remote primitive operation failed
    Primitive,
    /// Option lookup found nothing under a resolved parent
    NoMatch,
}

/// The remote step that failed while applying an action to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Click,
    MoveMouse,
    DoubleClick,
    Clear,
    EnterText,
    ReadType,
    ReadState,
    FindOptions,
    ClickOption { text: String },
    Submit,
}

impl Step {
    /// Render the failure context for this step against `selection`.
    pub fn context(&self, selection: &str) -> String {
        match self {
            Step::Click => format!("failed to click on '{}'", selection),
            Step::MoveMouse => format!("failed to move mouse to '{}'", selection),
            Step::DoubleClick => format!("failed to double-click on '{}'", selection),
            Step::Clear => format!("failed to clear '{}'", selection),
            Step::EnterText => format!("failed to enter text into '{}'", selection),
            Step::ReadType => format!("failed to retrieve type of '{}'", selection),
            Step::ReadState => format!("failed to retrieve state of '{}'", selection),
            Step::FindOptions => {
                format!("failed to select specified option for some '{}'", selection)
            }
            Step::ClickOption { text } => format!(
                "failed to click on option with text \"{}\" for some '{}'",
                text, selection
            ),
            Step::Submit => format!("failed to submit '{}'", selection),
        }
    }
}

/// Errors returned by every semantic action.
///
/// Elements handled before the failing one keep their effects; nothing is
/// rolled back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Resolving the selection failed
    #[error("failed to select '{selection}': {source}")]
    Resolution {
        selection: String,
        source: DriverError,
    },

    /// A primitive remote operation failed on one element
    #[error("{}: {source}", .step.context(.selection))]
    Primitive {
        step: Step,
        selection: String,
        source: DriverError,
    },

    /// Check/Uncheck target is not an `<input type="checkbox">`
    #[error("'{selection}' does not refer to a checkbox")]
    NotCheckbox {
        selection: String,
        found: Option<String>,
    },

    /// No `<option>` with the requested text under a matched parent
    #[error("no options with text \"{text}\" found for some '{selection}'")]
    NoMatchingOption { text: String, selection: String },
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::Resolution { .. } => ErrorKind::Resolution,
            ActionError::Primitive { .. } => ErrorKind::Primitive,
            ActionError::NotCheckbox { .. } => ErrorKind::Validation,
            ActionError::NoMatchingOption { .. } => ErrorKind::NoMatch,
        }
    }

    /// Description of the selection the failing action targeted.
    pub fn selection(&self) -> &str {
        match self {
            ActionError::Resolution { selection, .. }
            | ActionError::Primitive { selection, .. }
            | ActionError::NotCheckbox { selection, .. }
            | ActionError::NoMatchingOption { selection, .. } => selection,
        }
    }

    /// Check if calling the action again may succeed.
    ///
    /// Only stale handles qualify: every call re-resolves the selection.
    pub fn is_retryable(&self) -> bool {
        matches!(self.driver_error(), Some(DriverError::StaleElement(_)))
    }

    /// Get error severity level (0=low, 1=medium, 2=high, 3=critical)
    pub fn severity(&self) -> u8 {
        match self {
            ActionError::Resolution {
                source: DriverError::NoSuchSession(_),
                ..
            } => 3,
            ActionError::Resolution { .. } => 2,
            ActionError::Primitive { .. } => 1,
            ActionError::NotCheckbox { .. } | ActionError::NoMatchingOption { .. } => 0,
        }
    }

    pub fn step(&self) -> Option<&Step> {
        match self {
            ActionError::Primitive { step, .. } => Some(step),
            _ => None,
        }
    }

    /// The collaborator error underneath, if any.
    pub fn driver_error(&self) -> Option<&DriverError> {
        match self {
            ActionError::Resolution { source, .. } | ActionError::Primitive { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
