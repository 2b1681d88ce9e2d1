use workout_tracker::config::Config;
use workout_tracker_cli::{env_filter, packages_for, run_packages};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&config.log_level))
        .init();
    tracing::info!("workout_tracker: log filter: {}", config.log_level);

    let packages = packages_for(&config)?;
    tracing::info!(
        "workout_tracker: processing {} packages as {}",
        packages.len(),
        config.output
    );

    let stdout = std::io::stdout();
    let summary = run_packages(&packages, config.output, &mut stdout.lock())?;

    tracing::info!(
        "workout_tracker: {} processed, {} failed",
        summary.processed,
        summary.failed
    );
    Ok(())
}
