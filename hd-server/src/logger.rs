//! Global logger setup.
//!
//! Log lines go to the configured file when one is set, otherwise to
//! stdout. sqlx emits tracing events, so a tracing-to-log bridge is
//! installed as the last step.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

pub fn initialize(
    level: hd_config::LogLevel,
    file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let dispatch = Dispatch::new().level(level.0);

    let dispatch = match file {
        Some(ref path) => {
            let sink = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("cannot open log file {}: {e}", path.display()),
            })?;
            dispatch.format(line_format(None)).chain(sink)
        }
        // Colors only make sense on a terminal, never in a file
        None if colored => dispatch
            .format(line_format(Some(level_palette())))
            .chain(std::io::stdout()),
        None => dispatch.format(line_format(None)).chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("logger already installed: {e}"),
    })?;

    match file {
        Some(path) => info!("Logging to {} at {}", path.display(), level.0),
        None => info!("Logging to stdout at {}", level.0),
    }

    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn level_palette() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::Cyan)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn line_format(
    palette: Option<ColoredLevelConfig>,
) -> impl Fn(fern::FormatCallback, &std::fmt::Arguments, &log::Record) + Sync + Send + 'static {
    move |out, message, record| {
        let timestamp = humantime::format_rfc3339_seconds(SystemTime::now());
        match palette {
            Some(palette) => out.finish(format_args!(
                "{timestamp} {} {}: {message}",
                palette.color(record.level()),
                record.target(),
            )),
            None => out.finish(format_args!(
                "{timestamp} {} {}: {message}",
                record.level(),
                record.target(),
            )),
        }
    }
}
