use std::fs::File;

const LOG_FILE: &str = "periscope.log";

#[derive(thiserror::Error, Debug)]
pub enum LoggerError {
    #[error("Failed to open log file: {0}")]
    File(#[from] std::io::Error),
    #[error("Logger already initialized: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

pub fn setup(level: log::LevelFilter) -> Result<(), LoggerError> {
    let log_path = data::data_path(Some(LOG_FILE));
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = File::create(&log_path)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Warn)
        .level_for("periscope", level)
        .level_for("periscope_data", level)
        .chain(std::io::stdout())
        .chain(log_file)
        .apply()?;

    Ok(())
}
