//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Help subject, manifest or config not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or manifest contents.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variables read by the CLI.
pub mod env {
    /// Overrides the config file location.
    pub const CONFIG: &str = "HELPDOC_CONFIG";

    /// Log filter (tracing `EnvFilter` syntax).
    pub const LOG: &str = "HELPDOC_LOG";

    /// Set by ConEmu when it renders ANSI; faint text is unreadable there.
    pub const CONEMU_ANSI: &str = "ConEmuANSI";
}

/// Width used when nothing else says otherwise.
pub const DEFAULT_WIDTH: usize = 80;

/// Narrower terminals are rendered at this width.
pub const MIN_WIDTH: usize = 40;
