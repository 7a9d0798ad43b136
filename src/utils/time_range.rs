//! 时间范围解析
//!
//! 缺省时取最近24小时

/// 默认窗口长度（秒）
pub const DEFAULT_WINDOW_SECS: i64 = 86_400;

pub struct TimeRangeResolver;

impl TimeRangeResolver {
    /// 解析查询时间范围
    ///
    /// # 参数
    /// * `time_from` - 可选起始时间（unix 秒），缺省为 `now - 86400`
    /// * `time_to` - 可选结束时间（unix 秒），缺省为 `now`
    /// * `now` - 当前时间（unix 秒）
    ///
    /// 不校验顺序，倒置的范围原样返回
    pub fn resolve(time_from: Option<i64>, time_to: Option<i64>, now: i64) -> (i64, i64) {
        let from = time_from.unwrap_or_else(|| now.saturating_sub(DEFAULT_WINDOW_SECS));
        let to = time_to.unwrap_or(now);
        (from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_default_window() {
        assert_eq!(TimeRangeResolver::resolve(None, None, NOW), (NOW - 86_400, NOW));
    }

    #[test]
    fn test_partial_defaults() {
        assert_eq!(TimeRangeResolver::resolve(Some(42), None, NOW), (42, NOW));
        assert_eq!(TimeRangeResolver::resolve(None, Some(99), NOW), (NOW - 86_400, 99));
    }

    #[test]
    fn test_inverted_range_passes_through() {
        assert_eq!(TimeRangeResolver::resolve(Some(500), Some(100), NOW), (500, 100));
    }

    #[test]
    fn test_zero_is_a_real_bound() {
        assert_eq!(TimeRangeResolver::resolve(Some(0), Some(0), NOW), (0, 0));
    }
}
