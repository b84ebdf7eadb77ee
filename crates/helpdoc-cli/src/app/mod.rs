//! Application-level utilities for the Helpdoc CLI.
//!
//! This module provides:
//! - Path resolution for config and manifest files
//! - A context that loads config, manifest and terminal state once

mod context;
mod resolver;

pub use context::AppContext;
