//! Selection actions - apply semantic browser actions to every element a
//! selection matches
//!
//! This crate provides:
//! - A dispatcher that re-resolves a [`Selection`] and applies one action to
//!   each match in order, stopping at the first failure
//! - 6 semantic actions: click, double_click, fill, check/uncheck, select, submit
//! - Error contextualization carrying the selection description
//! - Collaborator ports for the resolver, element handles and pointer session

mod actions;
mod dispatcher;
pub mod errors;
pub mod ports;
pub mod query;
mod selection;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use actions::*;
pub use dispatcher::*;
pub use errors::*;
pub use ports::*;
pub use selection::*;

pub use selectkit_core_types::{DriverError, ElementId, Selector, SelectorChain, Using};
