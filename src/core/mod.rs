//! Core library components.
//!
//! Credential storage, the chat client seam, and the key rotation loop.
//! Nothing in here writes to the terminal.

pub mod client;
pub mod config;
pub mod constants;
pub mod domain;
pub mod rotation;
pub mod store;
