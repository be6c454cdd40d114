use std::io::Write;

use log::LevelFilter;

/// Parses a verbosity name, accepting Python-style aliases (`warning`, `critical`).
pub fn parse_level(value: &str) -> Result<LevelFilter, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => Ok(LevelFilter::Off),
        "error" | "critical" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(format!(
            "unknown log level '{other}' (expected off, error, warn, info, debug or trace)"
        )),
    }
}

/// Installs the process-wide logger. Call once, from `main`.
///
/// Output goes to stderr as `LEVEL    timestamp target | message`, so stdout
/// carries only the summary line. HTTP internals are capped at `info`.
pub fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info.min(level));
    builder.filter_module("hyper", LevelFilter::Info.min(level));
    builder.filter_module("hyper_util", LevelFilter::Info.min(level));
    builder.filter_module("rustls", LevelFilter::Warn.min(level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{:<8} {} {} | {}",
            record.level(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.module_path().unwrap_or_else(|| record.target()),
            record.args()
        )
    });

    builder.try_init()?;
    Ok(())
}
