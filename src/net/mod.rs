//! Networking modules for the HR backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST transport and error-message resolution, `resources`
//! exposes typed endpoint wrappers, and `types` defines the shared wire
//! schema.

pub mod api;
pub mod resources;
pub mod types;
