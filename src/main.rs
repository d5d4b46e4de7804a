use anyhow::Result;
use tracing_subscriber::EnvFilter;
use urlmap::config::{self, Config};
use urlmap::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
