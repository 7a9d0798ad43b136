use crate::types::{ChartSeries, NormalizedPoint};

/// 将规范化后的点拆分为两个按下标对齐的数组，null 原样保留
pub struct ChartDataProjector;

impl ChartDataProjector {
    pub fn project(points: &[NormalizedPoint]) -> ChartSeries {
        let (timestamps, values) = points
            .iter()
            .map(|point| (point.timestamp_ms, point.value.clone()))
            .unzip();

        ChartSeries { timestamps, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};

    fn number(value: serde_json::Value) -> Option<Number> {
        value.as_number().cloned()
    }

    #[test]
    fn test_project_empty() {
        let series = ChartDataProjector::project(&[]);
        assert!(series.timestamps.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn test_project_keeps_nulls_aligned() {
        let points = vec![
            NormalizedPoint { timestamp_ms: 1_000, value: number(json!(1.5)) },
            NormalizedPoint { timestamp_ms: 2_000, value: None },
            NormalizedPoint { timestamp_ms: 3_000, value: number(json!(7)) },
        ];

        let series = ChartDataProjector::project(&points);
        assert_eq!(series.timestamps, vec![1_000, 2_000, 3_000]);
        assert_eq!(series.values, vec![number(json!(1.5)), None, number(json!(7))]);
        assert_eq!(series.timestamps.len(), series.values.len());
    }

    #[test]
    fn test_serialized_shape() {
        let series = ChartDataProjector::project(&[NormalizedPoint { timestamp_ms: 5, value: None }]);
        assert_eq!(
            serde_json::to_value(&series).unwrap(),
            json!({ "timestamps": [5], "values": [null] })
        );
    }
}
