use std::env;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// OpenWeatherMap 当前天气接口的响应结构
/// 只消费 weather[0].description 和 main.temp 两个字段，其余忽略
#[derive(Serialize, Deserialize, Debug)]
pub struct WeatherData {
    pub weather: Vec<WeatherItem>,
    pub main: MainData,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WeatherItem {
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MainData {
    pub temp: f64,
}

/// 归一化之后的单次观测结果
#[derive(Debug, Clone)]
pub struct WeatherNow {
    pub description: String,
    pub temperature: f64,
}

/// 天气数据源。collector 只依赖这个trait，方便测试时用桩实现替换真实接口
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn get_weather_now(&self, city: &str) -> Result<WeatherNow>;
}

pub struct OpenWeatherClient {
    client: Client,
    app_id: String,
}

impl OpenWeatherClient {
    pub fn new(app_id: String) -> Self {
        OpenWeatherClient {
            client: Client::new(),
            app_id,
        }
    }

    pub fn from_env() -> Result<Self> {
        let app_id = env::var("APP_ID").map_err(|_| anyhow!("APP_ID config is none"))?;
        Ok(Self::new(app_id))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn get_weather_now(&self, city: &str) -> Result<WeatherNow> {
        let url = "https://api.openweathermap.org/data/2.5/weather";
        let response = self
            .client
            .get(url)
            .query(&[("q", city), ("appid", self.app_id.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status_code = response.status();
        let response_body = response.text().await?;
        debug!("city:{}, openweather_response: {}", city, response_body);

        if status_code != StatusCode::OK {
            return Err(anyhow!("请求失败: status={}, body={}", status_code, response_body));
        }

        let data: WeatherData = serde_json::from_str(&response_body)?;
        let item = data
            .weather
            .first()
            .ok_or_else(|| anyhow!("响应缺少weather字段: {}", response_body))?;
        Ok(WeatherNow {
            description: item.description.clone(),
            temperature: data.main.temp,
        })
    }
}
