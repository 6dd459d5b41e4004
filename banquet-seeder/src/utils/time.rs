//! 时间工具函数 — 样本数据时间轴
//!
//! 所有时间戳统一为 `i64` Unix millis。样本数据从一个固定锚点日期推导,
//! 保证两次运行生成完全相同的数据集。

use chrono::{Duration, NaiveDate};

/// 样本数据锚点日期 (所有事件日期相对于此推导)
pub const SEED_ANCHOR: &str = "2026-06-01";

/// 锚点日期
pub fn anchor_date() -> NaiveDate {
    // 常量格式固定, 解析不会失败
    NaiveDate::parse_from_str(SEED_ANCHOR, "%Y-%m-%d").expect("SEED_ANCHOR is a valid date")
}

/// 锚点 + 偏移天数 + 时分 → Unix millis (UTC)
pub fn anchor_offset_millis(days: i64, hour: u32, min: u32) -> i64 {
    let date = anchor_date() + Duration::days(days);
    date.and_hms_opt(hour, min, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_else(|| day_start_millis(date))
}

/// 日期开始 (00:00:00) → Unix millis (UTC)
pub fn day_start_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// 锚点 + 偏移天数 → 日期字符串 (YYYY-MM-DD)
pub fn anchor_offset_date(days: i64) -> String {
    (anchor_date() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// 两个时间戳之间的小时数 (扣除休息分钟)
pub fn worked_hours(clock_in: i64, clock_out: i64, break_minutes: i64) -> f64 {
    let worked_millis = (clock_out - clock_in - break_minutes * 60_000).max(0);
    let hours = worked_millis as f64 / 3_600_000.0;
    // 取两位小数
    (hours * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offsets_are_deterministic() {
        assert_eq!(anchor_offset_date(0), "2026-06-01");
        assert_eq!(anchor_offset_date(14), "2026-06-15");
        assert_eq!(
            anchor_offset_millis(0, 18, 30) - anchor_offset_millis(0, 18, 0),
            30 * 60_000
        );
    }

    #[test]
    fn worked_hours_subtracts_breaks() {
        let start = anchor_offset_millis(0, 9, 0);
        let end = anchor_offset_millis(0, 17, 30);
        assert_eq!(worked_hours(start, end, 30), 8.0);
        // negative spans clamp to zero
        assert_eq!(worked_hours(end, start, 0), 0.0);
    }
}
