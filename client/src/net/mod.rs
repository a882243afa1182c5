//! Networking modules for the remote auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and classifies failures, and `types`
//! defines the request and error payloads.

pub mod api;
pub mod types;
