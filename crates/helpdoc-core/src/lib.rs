//! # Helpdoc Core
//!
//! Core library for Helpdoc - help text rendering for command-line programs
//! organized into commands and colon-delimited topics.
//!
//! This crate turns declarative command descriptors into aligned, wrapped,
//! ANSI-aware help documents. It does no I/O: callers hand it a [`Registry`]
//! and [`RenderOptions`] and print the string it returns.
//!
//! ## Architecture
//!
//! - **text**: visible-width measurement and word wrap
//! - **model**: command, flag, argument and topic descriptors
//! - **registry**: read-only snapshot of a program's commands and topics
//! - **render**: two-column lists, sections, and screen/markdown/man output
//! - **help**: command, root and topic help builders plus the help router
//! - **substitute**: placeholder resolution in help text
//!
//! ## Example
//!
//! ```
//! use helpdoc_core::{CommandDescriptor, FlagSpec, Help, Registry, RenderOptions};
//!
//! let registry = Registry::builder("mycli")
//!     .command(
//!         CommandDescriptor::builder("apps:create")
//!             .flag(FlagSpec::boolean("force").with_help("forces"))
//!             .build()?,
//!     )
//!     .build()?;
//! let help = Help::new(&registry, RenderOptions::default().stripped());
//! let text = help.show_help(&["apps:create"])?;
//! assert!(text.contains("--force  forces"));
//! # Ok::<(), helpdoc_core::HelpError>(())
//! ```

pub mod error;
pub mod help;
pub mod model;
pub mod registry;
pub mod render;
pub mod substitute;
pub mod text;
pub mod theme;

pub use error::{HelpError, Result};
pub use help::{help_subject, CommandHelp, Help, RootHelp, TopicHelp};
pub use model::{ArgSpec, CommandDescriptor, FlagKind, FlagSpec, TopicDescriptor};
pub use registry::Registry;
pub use render::{OutputFormat, RenderOptions};
pub use substitute::{ConfigTemplate, Substitute};
pub use theme::{DimStyle, Theme};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
