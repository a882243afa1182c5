//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) so components depend on small
//! focused models. `session` holds the controller that moves `auth` forward
//! in response to remote calls.

pub mod auth;
pub mod session;
pub mod toast;
