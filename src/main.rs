use anyhow::Result;
use flightreport::{config::ReportConfig, run};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stdout carries the report only
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) configure input ──────────────────────────────────────────
    let config = ReportConfig::default();
    info!(path = %config.input_path.display(), column = %config.date_column, "startup");

    // ─── 3) load, aggregate, print ───────────────────────────────────
    let summary = run(&config)?;
    println!("{}", summary);

    Ok(())
}
