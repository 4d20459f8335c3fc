use crate::domain::error::JsontrError;
use crate::infrastructure::config::Logging;
use tracing_subscriber::EnvFilter;

/// Map the config level name to an `EnvFilter` directive
pub fn level_directive(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    }
}

/// Initialize logging with path and level configuration
pub fn init_logging(logging: &Logging) -> Result<(), JsontrError> {
    if !logging.enable {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(&logging.level)));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
            return Ok(());
        }
    }

    // stdout carries the translated JSON, so logs always go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
