#[cfg(feature = "cli")]
pub mod cli;
pub mod output;

#[cfg(feature = "cli")]
pub use cli::{trimmed_args, Action, CliConfig};
pub use output::OutputConfig;
