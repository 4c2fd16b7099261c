//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, storage,
//! configuration, navigation policy) from page and component logic to
//! improve reuse and testability.

pub mod config;
pub mod credentials;
pub mod guard;
