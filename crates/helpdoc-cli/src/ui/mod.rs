//! UI primitives for the Helpdoc CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, dim style)
//! - **Mode**: Output format resolution (screen, markdown, man)

mod context;
mod mode;

pub use context::UiContext;
pub use mode::Presentation;
