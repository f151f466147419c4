use chrono::NaiveDate;

use crate::time_util;
use crate::weather::collector::WeatherSample;

/// 日期窗口：要么精确等于某个日历日，要么从某个日历日起（含）
///
/// 边界是日历日而不是时间戳，比较时丢掉时分秒。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    /// inserted_at 的日期 == date
    On(NaiveDate),
    /// inserted_at 的日期 >= date，用于周/7天滚动窗口
    Since(NaiveDate),
}

impl DateWindow {
    pub fn today() -> Self {
        DateWindow::On(time_util::today())
    }

    pub fn yesterday() -> Self {
        DateWindow::On(time_util::yesterday())
    }

    /// 本周（从最近的周一起）
    pub fn current_week() -> Self {
        DateWindow::Since(time_util::week_start())
    }

    pub fn last_7_days() -> Self {
        DateWindow::Since(time_util::days_ago(7))
    }

    pub fn contains(&self, sample: &WeatherSample) -> bool {
        let date = sample.inserted_at.date();
        match self {
            DateWindow::On(boundary) => date == *boundary,
            DateWindow::Since(boundary) => date >= *boundary,
        }
    }

    /// 用于日志/错误信息
    pub fn label(&self) -> String {
        match self {
            DateWindow::On(d) => format!("= {}", d),
            DateWindow::Since(d) => format!(">= {}", d),
        }
    }
}

/// 窗口内的全部样本，保持history的枚举顺序
pub fn filter_window<'a>(history: &'a [WeatherSample], window: DateWindow) -> Vec<&'a WeatherSample> {
    history.iter().filter(|s| window.contains(s)).collect()
}

/// 窗口内指定城市的样本
pub fn filter_city_window<'a>(
    history: &'a [WeatherSample],
    city_id: i32,
    window: DateWindow,
) -> Vec<&'a WeatherSample> {
    history
        .iter()
        .filter(|s| s.city_id == city_id && window.contains(s))
        .collect()
}
