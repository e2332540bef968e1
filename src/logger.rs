use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;

/// Configure the global logger.
///
/// Verbosity maps `-v` counts to levels (0 = warn, 1 = info, 2 = debug,
/// 3+ = trace). Log lines go to stderr so stdout stays clean for exported
/// documents; an optional file sink can be chained in addition.
pub fn setup_logger(verbosity: u8, log_file: Option<&Path>) -> Result<(), log::SetLoggerError> {
    let log_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level)
        .chain(std::io::stderr());

    if let Some(file_path) = log_file {
        match OpenOptions::new().create(true).append(true).open(file_path) {
            Ok(file) => {
                dispatch = dispatch.chain(file);
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to open log file '{}': {}",
                    file_path.display(),
                    e
                );
                eprintln!("Continuing without file logging.");
            }
        }
    }

    dispatch.apply()?;

    log::debug!("Logger initialized with level: {log_level}");
    Ok(())
}
