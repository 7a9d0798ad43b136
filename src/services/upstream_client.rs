use crate::config::UpstreamConfig;
use crate::types::PriceQuery;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("upstream returned HTTP {0}")]
    HttpStatus(u16),
    #[error("upstream transport error: {0}")]
    Transport(String),
    #[error("unexpected upstream error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            FetchError::HttpStatus(status.as_u16())
        } else if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
            FetchError::Transport(e.to_string())
        } else {
            FetchError::Unexpected(e.to_string())
        }
    }
}

/// 上游价格历史接口客户端，每次调用只发一次请求，不重试不缓存
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow::anyhow!("创建HTTP客户端失败: {}", e))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// 获取原始价格历史JSON
    pub async fn fetch(&self, query: &PriceQuery) -> Result<Value, FetchError> {
        let result = self.send(query).await;

        if let Err(e) = &result {
            error!("❌ 获取 {} 价格历史失败: {}", query.address, e);
        }

        result
    }

    async fn send(&self, query: &PriceQuery) -> Result<Value, FetchError> {
        let mut request = self
            .client
            .get(&self.config.api_url)
            .query(query)
            .header("accept", "application/json")
            .header("x-chain", &self.config.chain);

        if let Some(api_key) = &self.config.api_key {
            request = request.header("X-API-KEY", api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        debug!("API Response: {}", body);

        serde_json::from_str(&body)
            .map_err(|e| FetchError::Unexpected(format!("响应不是合法JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AddressType;

    fn query() -> PriceQuery {
        PriceQuery {
            address: "So11111111111111111111111111111111111111112".to_string(),
            address_type: AddressType::Token,
            interval: "1m".to_string(),
            time_from: 1_700_000_000,
            time_to: 1_700_086_400,
        }
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // 绑定后立即释放，保证端口无人监听
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UpstreamClient::new(UpstreamConfig {
            api_url: format!("http://{}/defi/history_price", addr),
            timeout_secs: 5,
            ..UpstreamConfig::default()
        })
        .unwrap();

        let result = tokio_test::block_on(client.fetch(&query()));
        assert!(matches!(result, Err(FetchError::Transport(_))), "{:?}", result);
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::HttpStatus(401).to_string(), "upstream returned HTTP 401");
        assert!(FetchError::Transport("reset".into()).to_string().contains("reset"));
    }
}
