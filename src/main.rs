use anyhow::{Context, Result};
use snaplink::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber. `format` is `text` or `json`.
fn init_tracing(level: &str, format: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("Invalid RUST_LOG directive '{level}'"))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
