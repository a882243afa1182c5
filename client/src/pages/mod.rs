//! Page modules for the two top-level views.
//!
//! ARCHITECTURE
//! ============
//! `login` is shown while signed out and `shell` while signed in; `content`
//! holds the static blocks the shell switches between.

pub mod content;
pub mod login;
pub mod shell;
