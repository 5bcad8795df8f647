use async_trait::async_trait;
use std::sync::Mutex;
use volume_eject::domain::ports::Ejector;
use volume_eject::{run_execute, EjectError, Result};

#[derive(Default)]
struct RecordingEjector {
    calls: Mutex<Vec<String>>,
    busy: Vec<&'static str>,
}

#[async_trait]
impl Ejector for RecordingEjector {
    async fn eject(&self, path: &str) -> Result<()> {
        self.calls.lock().unwrap().push(path.to_string());
        if self.busy.iter().any(|b| *b == path) {
            return Err(EjectError::EjectFailed {
                path: path.to_string(),
                message: "resource busy".to_string(),
            });
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_ejects_every_path_in_order() {
    let ejector = RecordingEjector::default();

    let report = run_execute(&ejector, "/media/a\n/media/b\n/media/c").await;

    assert!(report.is_success());
    assert_eq!(report.ejected, vec!["/media/a", "/media/b", "/media/c"]);
    assert_eq!(*ejector.calls.lock().unwrap(), report.ejected);
}

#[tokio::test]
async fn test_failure_does_not_stop_remaining_paths() {
    let ejector = RecordingEjector {
        busy: vec!["/media/b"],
        ..Default::default()
    };

    let report = run_execute(&ejector, "/media/a\n/media/b\n/media/c").await;

    assert_eq!(report.ejected, vec!["/media/a", "/media/c"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "/media/b");
    assert!(report.failed[0].1.contains("resource busy"));
    assert_eq!(ejector.calls.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let ejector = RecordingEjector::default();

    let report = run_execute(&ejector, "\n/media/a\n\n  \n").await;

    assert_eq!(report.ejected, vec!["/media/a"]);
    assert_eq!(ejector.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_path_is_reported_without_eject_call() {
    let ejector = RecordingEjector::default();

    let report = run_execute(&ejector, "/media/bad\0name\n/media/ok").await;

    assert_eq!(report.ejected, vec!["/media/ok"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(*ejector.calls.lock().unwrap(), vec!["/media/ok".to_string()]);
}
