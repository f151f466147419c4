use rbatis::{crud, RBatis};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_config::db::get_db_client;
use crate::error::AppError;
use crate::time_util;
use crate::weather::stats::statistics::CityStatistics;

/// table
///
/// 每个城市每轮一行，四个窗口的指标摊平成列。
/// 空窗口或标准差未定义时对应列为 NULL，绝不会写 0。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct StatisticEntity {
    pub city_id: i32,
    pub date_inserted: String,

    pub city_max_today: Option<f64>,
    pub city_min_today: Option<f64>,
    pub city_std_today: Option<f64>,

    pub city_max_yesterday: Option<f64>,
    pub city_min_yesterday: Option<f64>,
    pub city_std_yesterday: Option<f64>,

    pub city_max_last_week: Option<f64>,
    pub city_min_last_week: Option<f64>,
    pub city_std_last_week: Option<f64>,

    pub city_max_last_7_days: Option<f64>,
    pub city_min_last_7_days: Option<f64>,
    pub city_std_last_7_days: Option<f64>,
}

crud!(StatisticEntity {}, "statistic");

impl From<&CityStatistics> for StatisticEntity {
    fn from(stats: &CityStatistics) -> Self {
        StatisticEntity {
            city_id: stats.city_id,
            date_inserted: time_util::format_date(&time_util::today()),
            city_max_today: stats.today.map(|s| s.max),
            city_min_today: stats.today.map(|s| s.min),
            city_std_today: stats.today.and_then(|s| s.std),
            city_max_yesterday: stats.yesterday.map(|s| s.max),
            city_min_yesterday: stats.yesterday.map(|s| s.min),
            city_std_yesterday: stats.yesterday.and_then(|s| s.std),
            city_max_last_week: stats.current_week.map(|s| s.max),
            city_min_last_week: stats.current_week.map(|s| s.min),
            city_std_last_week: stats.current_week.and_then(|s| s.std),
            city_max_last_7_days: stats.last_7_days.map(|s| s.max),
            city_min_last_7_days: stats.last_7_days.map(|s| s.min),
            city_std_last_7_days: stats.last_7_days.and_then(|s| s.std),
        }
    }
}

pub struct StatisticModel {
    db: &'static RBatis,
}

impl StatisticModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client(),
        }
    }

    pub async fn add_batch(&self, list: &[StatisticEntity]) -> Result<(), AppError> {
        if list.is_empty() {
            return Ok(());
        }
        let data = StatisticEntity::insert_batch(self.db, list, list.len() as u64).await?;
        info!("insert statistic rows_affected = {}", data.rows_affected);
        Ok(())
    }
}
