pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use adapters::system::{SystemEjector, SystemVolumes};
#[cfg(feature = "cli")]
pub use config::{Action, CliConfig};

pub use config::OutputConfig;
pub use crate::core::execute::{run_execute, ExecuteReport};
pub use crate::core::query::{build_services, list_volumes, run_query};
pub use domain::model::{MountedVolume, Volume};
pub use utils::error::{EjectError, Result};
