use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Routes `log` records to `file`, or disables logging entirely.
///
/// The game owns the terminal, so nothing is ever written to stdout/stderr.
pub fn init_logging(file: Option<&Path>, verbosity: u8) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    let Some(path) = file else {
        builder.filter_level(log::LevelFilter::Off);
        let _ = builder.try_init();
        return Ok(());
    };

    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    builder
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(sink)))
        .format(|fmt, record| {
            writeln!(fmt, "{} [{}] {}", fmt.timestamp(), record.level(), record.args())
        });
    let _ = builder.try_init();
    Ok(())
}
