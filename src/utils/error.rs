use thiserror::Error;

#[derive(Error, Debug)]
pub enum EjectError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to enumerate volumes: {message}")]
    VolumeListError { message: String },

    #[error("Failed to eject {path}: {message}")]
    EjectFailed { path: String, message: String },

    #[error("Ejecting volumes is not supported on {platform}")]
    Unsupported { platform: String },
}

impl EjectError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EjectError::IoError(e) => format!("Could not write output: {}", e),
            EjectError::SerializationError(e) => format!("Could not encode response: {}", e),
            EjectError::EjectFailed { path, message } => {
                format!("Could not eject {}: {}", path, message.trim())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EjectError>;
