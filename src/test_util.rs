use std::io::Write;

use tempfile::NamedTempFile;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,flightreport=debug")),
        )
        .with_test_writer()
        .finish();
    // already set by another test
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Write `content` to a fresh temp file that lives as long as the handle.
pub fn write_csv(content: &str) -> anyhow::Result<NamedTempFile> {
    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    Ok(tmp)
}
