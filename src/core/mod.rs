//! Shared plumbing around the menu tree: errors, request context, TOML
//! config, per-request resolution and terminal output.

pub mod config;
pub mod context;
pub mod error;
pub mod navigation;
pub mod output;
