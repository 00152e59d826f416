use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use taglog::logging::{init_logging, LoggingConfig};
use taglog::time::SplitTimer;
use taglog::{Logger, LoggerConfig};

struct Importer {
    rows: Vec<String>,
}

impl Importer {
    fn new() -> Self {
        Self { rows: Vec::new() }
    }

    fn run(&mut self) {
        let mut timings = SplitTimer::new("Importer", "run");

        thread::sleep(Duration::from_millis(12));
        self.rows = (1..=5).map(|n| format!("row-{n}")).collect();
        timings.add_split("fetch");

        // Tag derived from the enclosing type.
        taglog::debug!("fetched {} rows", self.rows.len());

        thread::sleep(Duration::from_millis(4));
        self.rows.retain(|r| !r.ends_with('3'));
        timings.add_split("filter");

        if let Err(err) = std::fs::read_to_string("/nonexistent/taglog-demo.csv") {
            taglog::warn!(of: self, err: err, "optional overrides missing");
        }
        timings.add_split("overrides");

        timings.render_to_log();
        print!("{}", timings.render_to_string());
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = LoggerConfig::from_env().context("failed to read taglog settings")?;
    taglog::set_global(Logger::with_log_crate(LoggerConfig { enabled: true, ..config }));

    taglog::info!(tag: "Demo", "starting with {:?}", taglog::global().config());

    Importer::new().run();

    taglog::set_lookup_mode(taglog::LookupMode::Full);
    taglog::assert_fail!(tag: "Demo", "reached the end; assert lines only log");

    taglog::set_enabled(false);
    taglog::error!(tag: "Demo", "never printed");

    Ok(())
}
