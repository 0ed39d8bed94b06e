use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Error reported by the remote driver collaborators (resolver, element
/// handles, pointer session).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("{message}")]
    Message { message: String },
    #[error("stale element reference: {0}")]
    StaleElement(ElementId),
    #[error("no such session: {0}")]
    NoSuchSession(SessionId),
    #[error("transport error: {0}")]
    Transport(String),
}

impl DriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Driver-assigned reference to one remote DOM node.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub String);

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location strategy understood by the driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Using {
    Css,
    XPath,
    LinkText,
    Name,
}

impl Using {
    fn label(&self) -> &'static str {
        match self {
            Using::Css => "CSS",
            Using::XPath => "XPath",
            Using::LinkText => "Link",
            Using::Name => "Name",
        }
    }
}

/// A single driver-level query.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Selector {
    pub using: Using,
    pub value: String,
}

impl Selector {
    pub fn new(using: Using, value: impl Into<String>) -> Self {
        Self {
            using,
            value: value.into(),
        }
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::new(Using::Css, value)
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(Using::XPath, value)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.using.label(), self.value)
    }
}

/// Ordered selectors, each applied within the matches of the previous one.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SelectorChain(pub Vec<Selector>);

impl SelectorChain {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self(selectors)
    }

    pub fn single(selector: Selector) -> Self {
        Self(vec![selector])
    }

    /// Returns a new chain with `selector` appended.
    pub fn then(&self, selector: Selector) -> Self {
        let mut selectors = self.0.clone();
        selectors.push(selector);
        Self(selectors)
    }
}

impl fmt::Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, selector) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", selector)?;
        }
        Ok(())
    }
}
