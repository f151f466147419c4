use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_weather::weather::collector::{collect_samples, retry_failures};
use rust_weather::weather::openweather::{WeatherNow, WeatherProvider};

/// 桩数据源：固定温度表，指定城市可以失败若干次
struct StubProvider {
    temps: HashMap<String, f64>,
    fail_city: Option<String>,
    fail_times: AtomicUsize,
}

impl StubProvider {
    fn new(temps: &[(&str, f64)]) -> Self {
        StubProvider {
            temps: temps
                .iter()
                .map(|(city, t)| (city.to_string(), *t))
                .collect(),
            fail_city: None,
            fail_times: AtomicUsize::new(0),
        }
    }

    fn failing(mut self, city: &str, times: usize) -> Self {
        self.fail_city = Some(city.to_string());
        self.fail_times = AtomicUsize::new(times);
        self
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn get_weather_now(&self, city: &str) -> Result<WeatherNow> {
        if self.fail_city.as_deref() == Some(city) {
            let remaining = self.fail_times.load(Ordering::SeqCst);
            if remaining > 0 {
                self.fail_times.fetch_sub(1, Ordering::SeqCst);
                return Err(anyhow!("provider unreachable"));
            }
        }
        let temperature = *self
            .temps
            .get(city)
            .ok_or_else(|| anyhow!("unknown city: {}", city))?;
        Ok(WeatherNow {
            description: "clear sky".to_string(),
            temperature,
        })
    }
}

fn as_of() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn cities(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_collect_assigns_positional_ids() -> Result<()> {
    let provider = StubProvider::new(&[("Tokyo", 28.0), ("Oslo", 12.0), ("Cairo", 35.0)]);
    let cities = cities(&["Tokyo", "Oslo", "Cairo"]);

    let (samples, failures) = collect_samples(&provider, &cities, as_of()).await;

    // N个城市零失败 → 恰好N条样本，city_id 为 1-based 位置
    assert!(failures.is_empty());
    assert_eq!(samples.len(), 3);
    for (index, sample) in samples.iter().enumerate() {
        assert_eq!(sample.city_id, index as i32 + 1);
        assert_eq!(sample.inserted_at, as_of());
    }
    assert_eq!(samples[0].temperature, 28.0);
    assert_eq!(samples[1].temperature, 12.0);
    assert_eq!(samples[2].temperature, 35.0);
    Ok(())
}

#[tokio::test]
async fn test_partial_failure_is_isolated() -> Result<()> {
    let provider =
        StubProvider::new(&[("Tokyo", 28.0), ("Oslo", 12.0), ("Cairo", 35.0)]).failing("Oslo", 9);
    let cities = cities(&["Tokyo", "Oslo", "Cairo"]);

    let (samples, failures) = collect_samples(&provider, &cities, as_of()).await;

    // 失败的城市被剔除，其余城市的 id 不受影响
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].city_id, 1);
    assert_eq!(samples[1].city_id, 3);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].city_id, 2);
    assert_eq!(failures[0].city, "Oslo");
    assert!(failures[0].cause.contains("unreachable"));
    Ok(())
}

#[tokio::test]
async fn test_retry_once_recovers_transient_failure() -> Result<()> {
    // 第一次失败，重试成功，city_id 保持原来的位置
    let provider =
        StubProvider::new(&[("Tokyo", 28.0), ("Oslo", 12.0)]).failing("Oslo", 1);
    let cities = cities(&["Tokyo", "Oslo"]);

    let (samples, failures) = collect_samples(&provider, &cities, as_of()).await;
    assert_eq!(samples.len(), 1);
    assert_eq!(failures.len(), 1);

    let (retried, still_failed) = retry_failures(&provider, failures, as_of()).await;
    assert!(still_failed.is_empty());
    assert_eq!(retried.len(), 1);
    assert_eq!(retried[0].city_id, 2);
    assert_eq!(retried[0].temperature, 12.0);
    Ok(())
}
