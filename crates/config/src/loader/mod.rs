//! Configuration loader for environment variables and explicit overrides.
//!
//! Responsibilities:
//! - Load `.env` files, environment variables and builder overrides.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to keep tests hermetic.
//!
//! Does NOT handle:
//! - Prompting the user for a layout (see the CLI's interactive module).
//! - Reading schema files from the resolved directories (see the core crate).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
