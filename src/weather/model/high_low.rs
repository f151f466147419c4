use chrono::NaiveDateTime;
use rbatis::RBatis;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_config::db::get_db_client;
use crate::error::AppError;
use crate::time_util;
use crate::weather::stats::HighLow;

/// 三个粒度各自一张高低温表
#[derive(Debug, Clone, Copy)]
pub enum HighLowTable {
    Hourly,
    Daily,
    Weekly,
}

impl HighLowTable {
    fn table_name(&self) -> &'static str {
        match self {
            HighLowTable::Hourly => "hourly_high_low",
            HighLowTable::Daily => "day_high_low",
            HighLowTable::Weekly => "weekly_high_low",
        }
    }
}

/// table
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct HighLowEntity {
    pub date_inserted: String,
    pub highest_temp_city_id: i32,
    pub lowest_temp_city_id: i32,
    pub highest_temp: f64,
    pub lowest_temp: f64,
}

impl HighLowEntity {
    pub fn from_high_low(high_low: &HighLow, date_inserted: &NaiveDateTime) -> Self {
        HighLowEntity {
            date_inserted: time_util::format_datetime(date_inserted),
            highest_temp_city_id: high_low.highest_temp_city_id,
            lowest_temp_city_id: high_low.lowest_temp_city_id,
            highest_temp: high_low.highest_temp,
            lowest_temp: high_low.lowest_temp,
        }
    }
}

pub struct HighLowModel {
    db: &'static RBatis,
}

impl HighLowModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client(),
        }
    }

    /// 表名按粒度动态选择，所以不走 crud! 宏，手工拼 insert
    pub async fn add(&self, table: HighLowTable, entity: &HighLowEntity) -> Result<(), AppError> {
        let query = format!(
            "INSERT INTO {} (date_inserted, highest_temp_city_id, lowest_temp_city_id, highest_temp, lowest_temp) VALUES (?, ?, ?, ?, ?)",
            table.table_name()
        );
        let params = vec![
            entity.date_inserted.clone().into(),
            entity.highest_temp_city_id.into(),
            entity.lowest_temp_city_id.into(),
            entity.highest_temp.into(),
            entity.lowest_temp.into(),
        ];
        let res = self.db.exec(&query, params).await?;
        info!(
            "insert {} rows_affected = {}",
            table.table_name(),
            res.rows_affected
        );
        Ok(())
    }
}
