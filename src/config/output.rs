use crate::core::writer::{JsonLinesWriter, WrappedFileWriter};
use crate::domain::ports::ResponseSink;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::PathBuf;

// Read through clap's `env` support in `CliConfig`.
pub const OUTPUT_ENV_KEY: &str = "OUTPUT";
pub const IDENTIFIER_ENV_KEY: &str = "IDENTIFIER";

/// Where query responses go. Without a path they are streamed to stdout as JSON lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub identifier: Option<String>,
}

impl OutputConfig {
    pub fn new(path: Option<PathBuf>, identifier: Option<String>) -> Self {
        Self {
            path: path.filter(|p| !p.as_os_str().is_empty()),
            identifier: identifier.filter(|i| !i.trim().is_empty()),
        }
    }

    pub fn sink(&self) -> Box<dyn ResponseSink> {
        match &self.path {
            Some(path) => Box::new(WrappedFileWriter::new(path, self.identifier.clone())),
            None => Box::new(JsonLinesWriter::stdout()),
        }
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.path {
            validate_path(OUTPUT_ENV_KEY, &path.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_unset() {
        let config = OutputConfig::new(Some(PathBuf::new()), Some("  ".to_string()));
        assert_eq!(config, OutputConfig::default());
    }

    #[test]
    fn test_path_is_kept() {
        let config = OutputConfig::new(Some(PathBuf::from("/tmp/out.json")), None);
        assert_eq!(config.path, Some(PathBuf::from("/tmp/out.json")));
        assert!(config.validate().is_ok());
    }
}
