use bigapp_logger::{LogRotation, LogSettings, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_with_directory_write_log_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let settings = LogSettings {
        name: "integration-file-logging".to_owned(),
        console: false,
        directory: Some(log_dir.clone()),
        rotation: LogRotation::Never,
        json: true,
        ..LogSettings::default()
    };
    let logger = Logger::from_settings(&settings)?;
    assert!(logger.has_file_output());

    tracing::info!(blueprint = "www", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(&log_file)?;
    assert!(content.contains(r#""blueprint":"www""#), "json output expected, got: {content}");

    Ok(())
}
