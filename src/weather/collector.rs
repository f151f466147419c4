use std::time::Duration;

use chrono::NaiveDateTime;
use futures_util::future::join_all;
use tracing::{info, warn};

use crate::weather::openweather::WeatherProvider;

/// 单次采样的超时时间
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// 一次观测：一个城市在某个时刻的温度和天气描述
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    pub city_id: i32,
    pub temperature: f64,
    pub description: String,
    pub inserted_at: NaiveDateTime,
}

/// 单个城市的采样失败，不会中断整轮采样
#[derive(Debug)]
pub struct FetchFailure {
    pub city_id: i32,
    pub city: String,
    pub cause: String,
}

/// 采样单个城市并归一化成 WeatherSample
pub async fn fetch_city_sample<P: WeatherProvider>(
    provider: &P,
    city: &str,
    city_id: i32,
    as_of: NaiveDateTime,
) -> Result<WeatherSample, FetchFailure> {
    info!("Fetching data for city: {}", city);
    let result = tokio::time::timeout(FETCH_TIMEOUT, provider.get_weather_now(city)).await;
    let now = match result {
        Ok(Ok(now)) => now,
        Ok(Err(e)) => {
            return Err(FetchFailure {
                city_id,
                city: city.to_string(),
                cause: e.to_string(),
            })
        }
        Err(_) => {
            return Err(FetchFailure {
                city_id,
                city: city.to_string(),
                cause: format!("timeout after {:?}", FETCH_TIMEOUT),
            })
        }
    };
    info!(
        "Fetched data for city: {}, temperature: {}, description: {}",
        city, now.temperature, now.description
    );
    Ok(WeatherSample {
        city_id,
        temperature: now.temperature,
        description: now.description,
        inserted_at: as_of,
    })
}

/// 并发采样全部城市，等待所有任务完成后统一收集结果
///
/// city_id 按城市在入参列表中的 1-based 位置分配，结果保持入参顺序。
/// 单个城市失败不会中断整轮，失败的城市从样本序列中剔除并以 FetchFailure 返回，
/// 由调用方决定记录或重试。
pub async fn collect_samples<P: WeatherProvider>(
    provider: &P,
    cities: &[String],
    as_of: NaiveDateTime,
) -> (Vec<WeatherSample>, Vec<FetchFailure>) {
    let tasks = cities
        .iter()
        .enumerate()
        .map(|(index, city)| fetch_city_sample(provider, city, index as i32 + 1, as_of));
    let results = join_all(tasks).await;

    let mut samples = Vec::with_capacity(cities.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(sample) => samples.push(sample),
            Err(failure) => {
                warn!(
                    "采样失败 city_id={} city={} cause={}",
                    failure.city_id, failure.city, failure.cause
                );
                failures.push(failure);
            }
        }
    }
    (samples, failures)
}

/// 对失败的城市重试一次（调用方策略，collector本身不做重试）
pub async fn retry_failures<P: WeatherProvider>(
    provider: &P,
    failures: Vec<FetchFailure>,
    as_of: NaiveDateTime,
) -> (Vec<WeatherSample>, Vec<FetchFailure>) {
    let tasks = failures
        .iter()
        .map(|f| fetch_city_sample(provider, &f.city, f.city_id, as_of));
    let results = join_all(tasks).await;

    let mut samples = Vec::new();
    let mut still_failed = Vec::new();
    for result in results {
        match result {
            Ok(sample) => samples.push(sample),
            Err(failure) => still_failed.push(failure),
        }
    }
    (samples, still_failed)
}
