use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use roster_api::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::init();
    roster_api::serve(config).await
}
