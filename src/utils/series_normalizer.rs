//! 上游价格数据规范化
//!
//! 上游响应视为不可信的半结构化文档：逐条、逐字段解析，
//! 单条记录异常只跳过该条，不影响整批数据

use crate::types::{NormalizedPoint, RawPriceItem};
use serde_json::{Number, Value};
use tracing::warn;

pub struct SeriesNormalizer;

impl SeriesNormalizer {
    /// 取出 `data.items`，缺失或类型不符时视为没有数据
    pub fn extract_items(body: &Value) -> &[Value] {
        body.get("data")
            .and_then(|data| data.get("items"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 规范化原始记录并按时间戳升序稳定排序
    ///
    /// - `unixTime` 缺失或无法解释为整数的记录被跳过并记录 warn
    /// - `value` 为数字时原样透传，null 或缺失时保留为 `None`，图表上显示为断点
    /// - 相同时间戳的记录保持输入顺序
    pub fn normalize(items: &[Value]) -> Vec<NormalizedPoint> {
        let mut points: Vec<NormalizedPoint> = items
            .iter()
            .filter_map(Self::normalize_item)
            .collect();

        // sort_by_key 为稳定排序
        points.sort_by_key(|point| point.timestamp_ms);
        points
    }

    fn normalize_item(item: &Value) -> Option<NormalizedPoint> {
        if !item.is_object() {
            warn!("跳过无法解析的价格记录（非对象）: {}", item);
            return None;
        }

        let raw: RawPriceItem = match serde_json::from_value(item.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("跳过无法解析的价格记录 {}: {}", item, e);
                return None;
            }
        };

        let timestamp_ms = raw
            .unix_time
            .as_ref()
            .and_then(parse_unix_time)
            .and_then(|secs| secs.checked_mul(1000));

        let Some(timestamp_ms) = timestamp_ms else {
            warn!(
                "Could not parse item unix_time={:?} value={:?}, skipping",
                raw.unix_time, raw.value
            );
            return None;
        };

        Some(NormalizedPoint {
            timestamp_ms,
            value: raw.value.as_ref().and_then(parse_value),
        })
    }
}

/// 整数、无小数部分的浮点数或整数字符串
fn parse_unix_time(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 数字原样保留；null 或缺失为 None；其他类型按 null 处理
fn parse_value(value: &Value) -> Option<Number> {
    match value {
        Value::Number(number) => Some(number.clone()),
        Value::Null => None,
        other => {
            warn!("价格值不是数字，按 null 处理: {}", other);
            None
        }
    }
}
