use crate::domain::model::{Response, Volume};
use crate::domain::ports::ResponseSink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// One compact JSON object per line.
pub struct JsonLinesWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonLinesWriter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResponseSink for JsonLinesWriter<W> {
    fn write_all(&mut self, volumes: &[Volume]) -> Result<()> {
        for volume in volumes {
            serde_json::to_writer(&mut self.out, volume)?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Writes every entry as a single wrapped object to a file.
#[derive(Debug, Clone)]
pub struct WrappedFileWriter {
    path: PathBuf,
    identifier: Option<String>,
}

impl WrappedFileWriter {
    pub fn new(path: impl Into<PathBuf>, identifier: Option<String>) -> Self {
        Self {
            path: path.into(),
            identifier,
        }
    }
}

impl ResponseSink for WrappedFileWriter {
    fn write_all(&mut self, volumes: &[Volume]) -> Result<()> {
        let response = Response {
            identifier: self.identifier.as_deref(),
            items: volumes,
        };
        let json = serde_json::to_vec(&response)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        tracing::debug!("Wrote {} entries to {}", volumes.len(), self.path.display());
        Ok(())
    }
}
