use rbatis::{crud, impl_select, RBatis};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_config::db::get_db_client;
use crate::error::AppError;
use crate::time_util;
use crate::weather::collector::WeatherSample;

/// table
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct HourlyWeatherEntity {
    pub city_id: i32,
    pub temperature: f64,
    pub description: String,
    pub inserted_at: String,
}

crud!(HourlyWeatherEntity {}, "hourly_weather");
impl_select!(HourlyWeatherEntity{fetch_since(date: &str) =>
    "`where inserted_at >= #{date} order by inserted_at asc`"}, "hourly_weather");

impl From<&WeatherSample> for HourlyWeatherEntity {
    fn from(sample: &WeatherSample) -> Self {
        HourlyWeatherEntity {
            city_id: sample.city_id,
            temperature: sample.temperature,
            description: sample.description.clone(),
            inserted_at: time_util::format_datetime(&sample.inserted_at),
        }
    }
}

impl HourlyWeatherEntity {
    pub fn to_sample(&self) -> Result<WeatherSample, AppError> {
        let inserted_at = time_util::parse_datetime(&self.inserted_at)
            .map_err(AppError::DbError)?;
        Ok(WeatherSample {
            city_id: self.city_id,
            temperature: self.temperature,
            description: self.description.clone(),
            inserted_at,
        })
    }
}

pub struct HourlyWeatherModel {
    db: &'static RBatis,
}

impl HourlyWeatherModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client(),
        }
    }

    /// 追加本轮采到的原始样本，只增不改
    pub async fn add(&self, samples: &[WeatherSample]) -> Result<(), AppError> {
        if samples.is_empty() {
            return Ok(());
        }
        let entities: Vec<HourlyWeatherEntity> =
            samples.iter().map(HourlyWeatherEntity::from).collect();
        let data =
            HourlyWeatherEntity::insert_batch(self.db, &entities, entities.len() as u64).await?;
        info!("insert hourly_weather rows_affected = {}", data.rows_affected);
        Ok(())
    }

    /// 加载回溯历史（周/7天汇总需要 >= 7 天），按时间升序
    pub async fn get_history(
        &self,
        since: chrono::NaiveDate,
    ) -> Result<Vec<WeatherSample>, AppError> {
        let date = time_util::format_date(&since);
        let entities = HourlyWeatherEntity::fetch_since(self.db, &date).await?;
        info!("加载样本历史: since={}, 共{}条", date, entities.len());
        entities.iter().map(|e| e.to_sample()).collect()
    }
}
