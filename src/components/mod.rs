//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and listing controls while reading
//! shared state from Leptos context providers.

pub mod app_shell;
pub mod pagination;
