use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Config, Log, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

fn add_console_sinks(builder: &mut LoggerBuilder) -> spdlog::Result<()> {
    let stdout = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stdout)
        .level_filter(LevelFilter::MoreVerbose(Level::Warn))
        .build()?);

    let stderr = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .level_filter(LevelFilter::MoreSevereEqual(Level::Warn))
        .build()?);

    builder.sink(stdout).sink(stderr);

    Ok(())
}

/// Builds the logger described by `[log]`: a daily rotating file when a
/// location is set, and the stdout/stderr pair when `log_to_console` is on.
/// Returns `None` when neither applies.
pub fn build_logger(log: &Log) -> spdlog::Result<Option<Logger>> {
    if log.location.is_none() && !log.log_to_console {
        return Ok(None);
    }

    let mut builder = Logger::builder();
    if let Some(ref location) = log.location {
        let daily_sink = Arc::new(RotatingFileSink::builder()
            .base_path(location)
            .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
            .max_files(log.max_files)
            .rotate_on_open(false)
            .build()?);
        builder.sink(daily_sink);
    }
    if log.log_to_console {
        add_console_sinks(&mut builder)?;
    }

    let logger = builder
        .name("minicms")
        .level_filter(LevelFilter::MoreSevereEqual(log.level.into()))
        .flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info))
        .build()?;
    Ok(Some(logger))
}

/// Makes the configured logger the default one. Without a `[log]` section
/// the spdlog console logger stays in place.
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let Some(ref log) = config.log else {
        return Ok(());
    };
    let Some(logger) = build_logger(log)? else {
        return Ok(());
    };

    let logger = Arc::new(logger);
    logger.set_flush_period(Some(Duration::from_secs(2)));
    spdlog::set_default_logger(logger);

    Ok(())
}
