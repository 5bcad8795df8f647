use crate::domain::ports::Ejector;
use crate::utils::validation::validate_path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExecuteReport {
    pub ejected: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl ExecuteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Newline-separated paths, trimmed, empty segments dropped.
pub fn split_paths(arg: &str) -> Vec<String> {
    arg.split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ejects every path in order. Failures are printed to stderr and the
/// remaining paths are still attempted.
pub async fn run_execute<E: Ejector + ?Sized>(ejector: &E, arg: &str) -> ExecuteReport {
    let mut report = ExecuteReport::default();

    for path in split_paths(arg) {
        let result = match validate_path("execute", &path) {
            Ok(()) => ejector.eject(&path).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                tracing::info!("Ejected {}", path);
                report.ejected.push(path);
            }
            Err(e) => {
                tracing::warn!("Eject failed for {}: {}", path, e);
                eprintln!("{}", e.user_friendly_message());
                report.failed.push((path, e.to_string()));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paths() {
        assert_eq!(
            split_paths("/Volumes/A\n/Volumes/B\n"),
            vec!["/Volumes/A".to_string(), "/Volumes/B".to_string()]
        );
        assert_eq!(split_paths(" /media/usb \r\n\n"), vec!["/media/usb".to_string()]);
        assert!(split_paths("\n\n").is_empty());
    }

    #[test]
    fn test_report_success() {
        let mut report = ExecuteReport::default();
        assert!(report.is_success());
        report.failed.push(("/x".to_string(), "busy".to_string()));
        assert!(!report.is_success());
    }
}
