use std::collections::BTreeMap;

use tracing::info;

use crate::weather::collector::WeatherSample;
use crate::weather::stats::window::{filter_window, DateWindow};

/// 默认的降水关键词
pub const DEFAULT_RAIN_KEYWORDS: [&str; 3] = ["rain", "thunderstorm", "drizzle"];

/// 描述里包含任意一个关键词即算一次降水事件（大小写不敏感的子串匹配）
pub fn is_rain_event(description: &str, keywords: &[String]) -> bool {
    let description = description.to_lowercase();
    keywords
        .iter()
        .any(|k| description.contains(&k.to_lowercase()))
}

/// 统计窗口内每个城市的降水事件次数
///
/// 没有任何匹配的城市不会出现在结果里，零次和没有样本在这里不做区分。
pub fn count_rain_events(
    history: &[WeatherSample],
    window: DateWindow,
    keywords: &[String],
) -> BTreeMap<i32, i64> {
    let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
    for sample in filter_window(history, window) {
        if is_rain_event(&sample.description, keywords) {
            *counts.entry(sample.city_id).or_insert(0) += 1;
        }
    }
    info!(
        "窗口 [{}] 降水事件: {} 个城市有记录",
        window.label(),
        counts.len()
    );
    counts
}
