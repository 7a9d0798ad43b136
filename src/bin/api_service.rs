use anyhow::Result;
use birdeye_chart::{services::ApiService, Config};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("🔧 启动价格图表API服务...");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    let api_service = ApiService::new(config)?;
    api_service.start().await?;

    Ok(())
}
