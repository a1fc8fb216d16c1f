use std::io::Write;

use anyhow::Context;
use libris_observability::ObservabilityConfig;

fn main() -> anyhow::Result<()> {
    let config = ObservabilityConfig::from_env().context("reading logging configuration")?;
    libris_observability::init_with(&config);

    let lines = libris_demo::run();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}").context("writing report")?;
    }

    tracing::info!(lines = lines.len(), "demo finished");
    Ok(())
}
