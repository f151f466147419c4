use anyhow::Result;
use tracing::{error, info};

use crate::time_util;
use crate::weather::collector::{collect_samples, retry_failures};
use crate::weather::model::high_low::{HighLowEntity, HighLowModel, HighLowTable};
use crate::weather::model::hourly_weather::HourlyWeatherModel;
use crate::weather::openweather::OpenWeatherClient;
use crate::weather::stats::{pick_extremes, DateWindow};
use crate::weather::WeatherConfig;

/// 小时任务：并发采样全部城市 → 落库原始样本 → 当日高低温汇总
pub async fn run(config: &WeatherConfig) -> Result<()> {
    let current_time = time_util::now_second();
    info!("Starting data fetching process");

    let provider = OpenWeatherClient::from_env()?;
    let (mut samples, failures) = collect_samples(&provider, &config.cities, current_time).await;

    // 失败的城市重试一次，仍失败的只记录不再处理
    if !failures.is_empty() {
        info!("对 {} 个失败城市重试一次", failures.len());
        let (retried, still_failed) = retry_failures(&provider, failures, current_time).await;
        samples.extend(retried);
        for failure in &still_failed {
            error!(
                "城市采样最终失败 city_id={} city={} cause={}",
                failure.city_id, failure.city, failure.cause
            );
        }
    }
    // 重试的样本放回原位置，保持按city_id的枚举顺序
    samples.sort_by_key(|s| s.city_id);

    info!("Saving all city data to the database");
    HourlyWeatherModel::new().add(&samples).await?;

    info!("Calculating and saving highest and lowest temperature data");
    let high_low = pick_extremes(&samples, DateWindow::today())?;
    let entity = HighLowEntity::from_high_low(&high_low, &current_time);
    HighLowModel::new().add(HighLowTable::Hourly, &entity).await?;

    info!("Data processing completed");
    Ok(())
}
