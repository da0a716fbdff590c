//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the interactive session
//! and the one-shot runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod session;
pub mod wizard;

// Re-export commonly used types
pub use app::{run_advice, run_music, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{AdviceArgs, Cli, Commands, ConfigAction};
pub use presenter::Presenter;
pub use session::{run_session, MusicOutcome, Session};
