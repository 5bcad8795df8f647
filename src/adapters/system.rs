use crate::domain::model::MountedVolume;
use crate::domain::ports::{Ejector, VolumeSource};
use crate::utils::error::{EjectError, Result};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::Path;
use sysinfo::Disks;
use tokio::process::Command;

/// Mounted volumes as reported by `sysinfo`. Anything not flagged removable counts as internal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemVolumes;

impl SystemVolumes {
    pub fn new() -> Self {
        Self
    }
}

impl VolumeSource for SystemVolumes {
    fn mounted_volumes(&self) -> Result<Vec<MountedVolume>> {
        let disks = Disks::new_with_refreshed_list();

        let volumes = disks
            .list()
            .iter()
            .map(|disk| MountedVolume {
                name: display_name(disk.mount_point(), disk.name()),
                path: disk.mount_point().to_path_buf(),
                is_internal: !disk.is_removable(),
            })
            .collect();

        Ok(volumes)
    }
}

fn display_name(mount_point: &Path, disk_name: &OsStr) -> String {
    mount_point
        .file_name()
        .unwrap_or(disk_name)
        .to_string_lossy()
        .into_owned()
}

/// Program and arguments that unmount and eject `path` on `os`.
pub fn eject_command(os: &str, path: &str) -> Result<(&'static str, Vec<String>)> {
    match os {
        "macos" => Ok(("diskutil", vec!["eject".to_string(), path.to_string()])),
        "linux" => Ok(("eject", vec![path.to_string()])),
        other => Err(EjectError::Unsupported {
            platform: other.to_string(),
        }),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEjector;

impl SystemEjector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Ejector for SystemEjector {
    async fn eject(&self, path: &str) -> Result<()> {
        let (program, args) = eject_command(std::env::consts::OS, path)?;
        run_eject_tool(program, &args, path).await
    }
}

async fn run_eject_tool(program: &str, args: &[String], path: &str) -> Result<()> {
    tracing::debug!("Running {} {:?}", program, args);

    let out = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| EjectError::EjectFailed {
            path: path.to_string(),
            message: format!("could not run {}: {}", program, e),
        })?;

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        let message = if stderr.trim().is_empty() {
            format!("{} exited with {}", program, out.status)
        } else {
            stderr.trim().to_string()
        };
        return Err(EjectError::EjectFailed {
            path: path.to_string(),
            message,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_uses_last_component() {
        assert_eq!(
            display_name(Path::new("/Volumes/USB Stick"), OsStr::new("disk2s1")),
            "USB Stick"
        );
    }

    #[test]
    fn test_display_name_falls_back_to_disk_name() {
        assert_eq!(display_name(Path::new("/"), OsStr::new("root")), "root");
    }

    #[test]
    fn test_eject_command_per_platform() {
        let (program, args) = eject_command("macos", "/Volumes/USB").unwrap();
        assert_eq!(program, "diskutil");
        assert_eq!(args, vec!["eject", "/Volumes/USB"]);

        let (program, args) = eject_command("linux", "/media/usb").unwrap();
        assert_eq!(program, "eject");
        assert_eq!(args, vec!["/media/usb"]);

        assert!(matches!(
            eject_command("windows", "E:\\"),
            Err(EjectError::Unsupported { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_tool_names_the_path() {
        let args = vec!["/media/usb".to_string()];
        let err = run_eject_tool("volume-eject-no-such-tool", &args, "/media/usb")
            .await
            .unwrap_err();

        assert!(matches!(err, EjectError::EjectFailed { .. }));
        let message = err.user_friendly_message();
        assert!(message.contains("/media/usb"), "{}", message);
        assert!(message.contains("could not run volume-eject-no-such-tool"), "{}", message);
        assert!(!message.contains("Could not write output"));
    }
}
