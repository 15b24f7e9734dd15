//! Post-build hook for Bazel workspaces.
//!
//! Scans a build log for Go "missing import" diagnostics, offers to run
//! Gazelle over the affected packages and remembers the user's answer.

/// Typed errors shared by every module
pub mod error;

/// Environment-driven configuration
pub mod config;

/// Extraction of missing-import problems from build logs
pub mod diagnostics;

/// Persisted user preferences
pub mod preferences;

/// Interactive yes/no/always/never prompt
pub mod prompt;

/// Subprocess seam for the fixer and the generated script
pub mod fixer;

/// Single-line terminal status rendering
pub mod status;

/// Ties parsing, preferences, prompting and fixing together
pub mod orchestrator;

// Re-export commonly used types for convenience
pub use config::{load_config, Config};
pub use diagnostics::{parse_problems, target_dirs, Problem};
pub use error::{HookError, Result};
pub use fixer::{CommandRunner, FixRequest, SubprocessResult, SystemRunner};
pub use orchestrator::{Outcome, Remediation, SkipReason};
pub use preferences::{FilePreferenceStore, PreferenceStore, RememberedChoice};
pub use prompt::{Prompter, Response, TerminalPrompter};
