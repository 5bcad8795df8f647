use crate::config::output::{OutputConfig, IDENTIFIER_ENV_KEY, OUTPUT_ENV_KEY};
use crate::utils::error::{EjectError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{ArgGroup, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "volume-eject", version)]
#[command(about = "Volume Eject Service: list and eject removable volumes")]
#[command(group(ArgGroup::new("action").required(true).args(["query", "execute"])))]
pub struct CliConfig {
    /// Query for specific volume to be removed
    #[arg(
        short = 'q',
        long,
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub query: Option<String>,

    /// Eject selected volumes (newline-separated paths)
    #[arg(
        short = 'x',
        long,
        value_name = "PATH",
        visible_short_alias = 'X',
        visible_alias = "alter-execute"
    )]
    pub execute: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Write query results as a single JSON object to this file
    #[arg(long, env = OUTPUT_ENV_KEY, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Identifier echoed back in file output
    #[arg(long, env = IDENTIFIER_ENV_KEY)]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Query(String),
    Execute(String),
}

impl CliConfig {
    pub fn action(&self) -> Result<Action> {
        match (&self.query, &self.execute) {
            (Some(name), None) => Ok(Action::Query(name.trim().to_string())),
            (None, Some(paths)) => Ok(Action::Execute(paths.clone())),
            _ => Err(EjectError::ConfigError {
                message: "exactly one of --query or --execute is required".to_string(),
            }),
        }
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.output.clone(), self.identifier.clone())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Action::Execute(paths) = self.action()? {
            validate_non_empty_string("execute", &paths)?;
        }
        self.output_config().validate()
    }
}

/// Strips surrounding whitespace and newlines from every argument.
pub fn trimmed_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| arg.into().to_string_lossy().trim().to_string())
        .collect()
}
