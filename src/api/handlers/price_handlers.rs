use super::super::ApiState;
use super::{service_error, ApiError, ErrorResponse};
use crate::types::{ChartSeries, PriceHistoryRequest};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

fn parse_query(query: Result<Query<PriceHistoryRequest>, QueryRejection>) -> Result<PriceHistoryRequest, ApiError> {
    query
        .map(|Query(request)| request)
        .map_err(|rejection| ErrorResponse::error(StatusCode::BAD_REQUEST, rejection.body_text()))
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// 价格历史原始数据
///
/// # 示例请求
/// ```text
/// GET /historic_price?address=So111...&address_type=token&time_type=1m
/// ```
///
/// 成功时原样返回上游JSON；失败时返回 `{"detail": "..."}`
pub async fn get_historic_price(
    State(state): State<ApiState>,
    query: Result<Query<PriceHistoryRequest>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let request = parse_query(query)?;

    match state.price_service.historic_price(&request, now()).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::error!("Error fetching price data: {}", e);
            Err(service_error(e))
        }
    }
}

/// 图表数据
///
/// # 返回值
/// ```json
/// { "timestamps": [1700000000000, ...], "values": [1.23, null, ...] }
/// ```
pub async fn get_price_data(
    State(state): State<ApiState>,
    query: Result<Query<PriceHistoryRequest>, QueryRejection>,
) -> Result<Json<ChartSeries>, ApiError> {
    let request = parse_query(query)?;

    match state.price_service.chart_data(&request, now()).await {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::error!("Error getting price data: {}", e);
            Err(service_error(e))
        }
    }
}
