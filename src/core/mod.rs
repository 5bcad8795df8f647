pub mod execute;
pub mod query;
pub mod writer;

pub use crate::domain::model::{MountedVolume, Response, Volume};
pub use crate::domain::ports::{Ejector, ResponseSink, VolumeSource};
pub use crate::utils::error::Result;
