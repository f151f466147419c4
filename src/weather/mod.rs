use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_config::env::env_or_default;
use crate::error::AppError;
use crate::weather::model::city::CityModel;

pub mod collector;
pub mod model;
pub mod openweather;
pub mod stats;
pub mod task;

/// 运行配置：按顺序排列的城市列表 + 降水关键词
///
/// 城市顺序是一个不可破坏的约定：city_id 等于城市在列表中的 1-based 位置，
/// 采样和统计必须使用同一份有序列表，否则 id 会指向错误的城市。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub cities: Vec<String>,
    pub rain_keywords: Vec<String>,
}

impl WeatherConfig {
    /// 进程启动时构建一次，之后按引用传入各个任务
    pub async fn load() -> Result<Self, AppError> {
        let cities = CityModel::new().get_all().await?;
        if cities.is_empty() {
            return Err(AppError::ConfigError("city表中没有城市数据".to_string()));
        }
        let cities: Vec<String> = cities.into_iter().map(|c| c.city).collect();

        let rain_keywords = env_or_default(
            "RAIN_KEYWORDS",
            &stats::rain::DEFAULT_RAIN_KEYWORDS.join(","),
        )
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

        info!("加载配置完成, 城市数量: {}", cities.len());
        Ok(WeatherConfig {
            cities,
            rain_keywords,
        })
    }

    /// city_id = 列表中的 1-based 位置
    pub fn city_id(&self, index: usize) -> i32 {
        index as i32 + 1
    }
}
