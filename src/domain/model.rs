use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const EJECT_ALL_TITLE: &str = "Eject All";
pub const EJECT_ALL_SUBTITLE: &str = "Eject all ejectable volumes listed below";

/// An entry handed to the plugin host. `id` is what comes back through `--execute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub title: String,
    pub subtitle: String,
    pub id: String,
}

impl Volume {
    pub fn from_path(title: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            title: title.into(),
            subtitle: path.clone(),
            id: path,
        }
    }

    pub fn eject_all(volumes: &[Volume]) -> Self {
        let id = volumes
            .iter()
            .map(|v| v.id.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            title: EJECT_ALL_TITLE.to_string(),
            subtitle: EJECT_ALL_SUBTITLE.to_string(),
            id,
        }
    }
}

/// A mounted filesystem as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedVolume {
    pub name: String,
    pub path: PathBuf,
    pub is_internal: bool,
}

impl MountedVolume {
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Wrapped output: a single object carrying every entry.
#[derive(Debug, Clone, Serialize)]
pub struct Response<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<&'a str>,
    pub items: &'a [Volume],
}
