use std::io::Write;
use std::sync::Once;

use crate::facade::Severity;

/// Backend configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "Net=trace,Timings=debug"). Targets are taglog tags.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global `log` backend, once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // The facade's enabled flag is the real gate; let everything through.
            builder.filter_level(log::LevelFilter::Trace);
        }

        builder.write_style(config.write_style);
        builder.format(|buf, record| {
            let severity = Severity::from_level(record.level());
            writeln!(buf, "{}", format_line(severity, record.target(), &record.args().to_string()))
        });

        // Another backend may already be installed; keep it.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!(target: "taglog", "logging initialized");
    });
}

/// `D/Tag: message`
pub fn format_line(severity: Severity, tag: &str, message: &str) -> String {
    format!("{}/{}: {}", severity.letter(), tag, message)
}
