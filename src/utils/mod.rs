//! 价格序列处理工具
//!
//! 时间范围解析、上游数据规范化、图表数据投影，均为无副作用的纯函数

pub mod time_range;
pub mod series_normalizer;
pub mod chart_projector;

pub use time_range::{TimeRangeResolver, DEFAULT_WINDOW_SECS};
pub use series_normalizer::SeriesNormalizer;
pub use chart_projector::ChartDataProjector;
