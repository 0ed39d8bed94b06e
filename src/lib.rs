//! selectkit library
//!
//! Resolves element selections against a remote document and applies one
//! semantic action to every match. The dispatch engine lives in
//! `selection-actions`; this crate adds configuration and logging bootstrap.

pub mod config;
pub mod logging;

pub use selection_actions::*;
pub use selectkit_core_types::SessionId;
