use std::io::Write;

use workout_tracker::config::{Config, OutputFormat};
use workout_tracker_cli::{BatchSummary, CliError, packages_for, run_packages};

fn config_for(path: &std::path::Path) -> Config {
    let path = path.to_string_lossy().into_owned();
    Config::from_env_with(move |k| match k {
        "WORKOUT_TRACKER_PACKAGES" => Some(path.clone()),
        _ => None,
    })
    .expect("cfg")
}

#[test]
fn file_batch_reports_each_package() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        file,
        r#"[
            {{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}},
            {{"workout_type": "FLY", "data": [1, 1, 1]}},
            {{"workout_type": "RUN", "data": [15000, 1]}},
            {{"workout_type": "WLK", "data": [9000, 1, 75, 180]}}
        ]"#
    )
    .expect("write");

    let packages = packages_for(&config_for(file.path())).expect("packages");
    let mut out = Vec::new();
    let summary = run_packages(&packages, OutputFormat::Text, &mut out).expect("run");

    assert_eq!(
        summary,
        BatchSummary {
            processed: 2,
            failed: 2
        }
    );
    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("Calories burned: 336.000."));
    assert_eq!(lines[1], "Error: unsupported activity: FLY");
    assert_eq!(lines[2], "Error: RUN expects 3 fields, got 2");
    assert!(lines[3].starts_with("Training type: SportsWalking;"));
}

#[test]
fn missing_package_file_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let res = packages_for(&config_for(&dir.path().join("nope.json")));
    assert!(matches!(res, Err(CliError::Tracker(_))));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_aborts_batch() {
    let packages = workout_tracker::package::sample_packages();
    let res = run_packages(&packages, OutputFormat::Text, &mut BrokenPipe);
    assert!(matches!(res, Err(CliError::Output(_))));
}
