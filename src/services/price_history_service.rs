use crate::services::upstream_client::{FetchError, UpstreamClient};
use crate::types::{ChartSeries, PriceHistoryRequest, PriceQuery};
use crate::utils::{ChartDataProjector, SeriesNormalizer, TimeRangeResolver};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceServiceError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// 价格历史服务：时间范围解析 → 上游请求 → 规范化 → 图表投影
#[derive(Debug, Clone)]
pub struct PriceHistoryService {
    client: UpstreamClient,
}

impl PriceHistoryService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// 校验请求并解析时间范围
    pub fn build_query(request: &PriceHistoryRequest, now: i64) -> Result<PriceQuery, PriceServiceError> {
        // 只拒绝空白地址，非空地址原样转发
        if request.address.trim().is_empty() {
            return Err(PriceServiceError::InvalidQuery("address must not be empty".to_string()));
        }

        let (time_from, time_to) = TimeRangeResolver::resolve(request.time_from, request.time_to, now);

        Ok(PriceQuery {
            address: request.address.clone(),
            address_type: request.address_type,
            interval: request.time_type.clone(),
            time_from,
            time_to,
        })
    }

    /// 上游原始JSON，不做任何处理
    pub async fn historic_price(
        &self,
        request: &PriceHistoryRequest,
        now: i64,
    ) -> Result<Value, PriceServiceError> {
        let query = Self::build_query(request, now)?;
        info!(
            "📈 查询价格历史 {} ({}) type={} [{}, {}]",
            query.address, query.address_type, query.interval, query.time_from, query.time_to
        );

        Ok(self.client.fetch(&query).await?)
    }

    /// 图表数据
    pub async fn chart_data(
        &self,
        request: &PriceHistoryRequest,
        now: i64,
    ) -> Result<ChartSeries, PriceServiceError> {
        let body = self.historic_price(request, now).await?;
        Ok(Self::to_chart_series(&body))
    }

    pub fn to_chart_series(body: &Value) -> ChartSeries {
        let items = SeriesNormalizer::extract_items(body);
        let points = SeriesNormalizer::normalize(items);
        let series = ChartDataProjector::project(&points);

        info!("图表数据: {} 个点（原始 {} 条）", series.len(), items.len());
        series
    }
}
