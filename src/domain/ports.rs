use crate::domain::model::{MountedVolume, Volume};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait VolumeSource {
    fn mounted_volumes(&self) -> Result<Vec<MountedVolume>>;
}

#[async_trait]
pub trait Ejector: Send + Sync {
    async fn eject(&self, path: &str) -> Result<()>;
}

pub trait ResponseSink {
    fn write_all(&mut self, volumes: &[Volume]) -> Result<()>;
}
