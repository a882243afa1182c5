//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and notifications while reading/writing
//! shared state from Leptos context providers.

pub mod sidebar;
pub mod toast_container;
