use std::collections::BTreeMap;

use chrono::NaiveDate;
use rbatis::RBatis;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_config::db::get_db_client;
use crate::error::AppError;
use crate::time_util;

#[derive(Debug, Clone, Copy)]
pub enum RainInfoTable {
    Daily,
    Weekly,
}

impl RainInfoTable {
    fn table_name(&self) -> &'static str {
        match self {
            RainInfoTable::Daily => "daily_rain_info",
            RainInfoTable::Weekly => "weekly_rain_info",
        }
    }
}

/// table
///
/// 零次降水的城市没有行，行缺失不等于"没有数据"。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct RainInfoEntity {
    pub city_id: i32,
    pub hourly_count: i64,
    pub inserted_at: String,
}

pub struct RainInfoModel {
    db: &'static RBatis,
}

impl RainInfoModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client(),
        }
    }

    /// 把降水计数写入日表或周表。counts 为空时什么都不写
    pub async fn add_counts(
        &self,
        table: RainInfoTable,
        counts: &BTreeMap<i32, i64>,
        inserted_at: NaiveDate,
    ) -> Result<(), AppError> {
        if counts.is_empty() {
            info!("窗口内没有降水事件, 跳过 {}", table.table_name());
            return Ok(());
        }
        let date = time_util::format_date(&inserted_at);
        let mut query = format!(
            "INSERT INTO {} (city_id, hourly_count, inserted_at) VALUES ",
            table.table_name()
        );
        let mut params = Vec::new();
        for (city_id, count) in counts {
            query.push_str("(?, ?, ?),");
            params.push((*city_id).into());
            params.push((*count).into());
            params.push(date.clone().into());
        }
        query.pop();
        let res = self.db.exec(&query, params).await?;
        info!(
            "insert {} rows_affected = {}",
            table.table_name(),
            res.rows_affected
        );
        Ok(())
    }
}
