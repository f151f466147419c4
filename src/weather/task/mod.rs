use chrono::NaiveDate;

use crate::time_util;

pub mod daily_job;
pub mod hourly_job;
pub mod weekly_job;

/// 历史回溯的起点：周窗口和7天窗口都要覆盖到
pub fn history_since() -> NaiveDate {
    std::cmp::min(time_util::week_start(), time_util::days_ago(7))
}
