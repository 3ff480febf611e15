//! Configuration management for the GNOME shortcut resolver.
//!
//! This crate provides the keyboard layout type and a loader that merges
//! `.env` files, environment variables and explicit overrides into the
//! runtime [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, KeyboardLayout, ParseLayoutError};
