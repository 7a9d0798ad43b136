use crate::{
    api::{create_router, ApiState},
    config::Config,
    services::{PriceHistoryService, UpstreamClient},
};
use anyhow::Result;
use tracing::info;

pub struct ApiService {
    config: Config,
    price_service: PriceHistoryService,
}

impl ApiService {
    pub fn new(config: Config) -> Result<Self> {
        let client = UpstreamClient::new(config.upstream.clone())?;
        let price_service = PriceHistoryService::new(client);

        Ok(Self {
            config,
            price_service,
        })
    }

    pub async fn start(&self) -> Result<()> {
        info!("🚀 启动API服务...");

        let api_state = ApiState::new(self.price_service.clone());
        let app = create_router(api_state, &self.config)?;
        let listener = tokio::net::TcpListener::bind(format!("{}:{}", self.config.server.host, self.config.server.port)).await?;

        info!("API Server starting on {}:{}", self.config.server.host, self.config.server.port);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
