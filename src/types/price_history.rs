// PriceQuery, AddressType, RawPriceItem, NormalizedPoint, ChartSeries
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_INTERVAL: &str = "1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Token,
    Pool,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Token => "token",
            AddressType::Pool => "pool",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "token" => Ok(AddressType::Token),
            "pool" => Ok(AddressType::Pool),
            other => Err(format!("invalid address_type '{}', expected token or pool", other)),
        }
    }
}

/// 入站查询参数，时间范围尚未解析
#[derive(Debug, Clone, Deserialize)]
pub struct PriceHistoryRequest {
    pub address: String,
    #[serde(default)]
    pub address_type: AddressType,
    #[serde(default = "default_interval")]
    pub time_type: String,
    pub time_from: Option<i64>,
    pub time_to: Option<i64>,
}

fn default_interval() -> String {
    DEFAULT_INTERVAL.to_string()
}

/// 发往上游的完整查询，时间范围已解析（unix 秒）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuery {
    pub address: String,
    pub address_type: AddressType,
    #[serde(rename = "type")]
    pub interval: String,
    pub time_from: i64,
    pub time_to: i64,
}

/// 上游返回的单条记录，逐字段宽松解析
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPriceItem {
    #[serde(rename = "unixTime", default)]
    pub unix_time: Option<serde_json::Value>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// value 保留上游原始数字（整数不会变成浮点数）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPoint {
    pub timestamp_ms: i64,
    pub value: Option<serde_json::Number>,
}

/// 图表数据：timestamps[i] 对应 values[i]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub timestamps: Vec<i64>,
    pub values: Vec<Option<serde_json::Number>>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
