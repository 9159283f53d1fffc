//! User interface and interaction
//!
//! This module contains all components related to user interaction:
//! CLI parsing, terminal color handling, output formatting and the
//! blocking confirmation prompt.

pub mod cli;
pub mod color;
pub mod confirm;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use confirm::{ConfirmationSource, TerminalPrompt};
pub use output::SweepMetadata;
