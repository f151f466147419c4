use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;
use tracing::{error, info};

use crate::error::AppError;
use crate::time_util;
use crate::weather::model::high_low::{HighLowEntity, HighLowModel, HighLowTable};
use crate::weather::model::hourly_weather::HourlyWeatherModel;
use crate::weather::model::rain_info::{RainInfoModel, RainInfoTable};
use crate::weather::model::statistic::{StatisticEntity, StatisticModel};
use crate::weather::stats::statistics::CityStatistics;
use crate::weather::stats::{count_rain_events, pick_extremes, DateWindow};
use crate::weather::WeatherConfig;

/// 日任务：对已落库的历史做统计汇总，不重新采样
///
/// 三块汇总（逐城市统计 / 当日高低温 / 当日降水计数）互相独立，
/// 某一块窗口为空只放弃那一块的写入，其余照常。
pub async fn run(config: &WeatherConfig) -> Result<()> {
    info!("Starting main process");
    let current_time = time_util::now_second();

    let history = HourlyWeatherModel::new()
        .get_history(super::history_since())
        .await?;
    let history = Arc::new(history);

    // 逐城市统计，归约是CPU工作，放到阻塞线程上算
    let tasks = (0..config.cities.len()).map(|index| {
        let history = Arc::clone(&history);
        let city_id = config.city_id(index);
        tokio::task::spawn_blocking(move || CityStatistics::compute(&history, city_id))
    });
    let mut rows: Vec<StatisticEntity> = Vec::with_capacity(config.cities.len());
    for result in join_all(tasks).await {
        let stats = result?;
        rows.push(StatisticEntity::from(&stats));
    }

    info!("Saving city statistics to the database");
    StatisticModel::new().add_batch(&rows).await?;

    info!("Calculating and saving highest and lowest temperature data");
    match pick_extremes(&history, DateWindow::today()) {
        Ok(high_low) => {
            let entity = HighLowEntity::from_high_low(&high_low, &current_time);
            HighLowModel::new().add(HighLowTable::Daily, &entity).await?;
        }
        Err(AppError::EmptyWindow(label)) => {
            error!("当日窗口 [{}] 没有样本, 放弃 day_high_low 这一行", label);
        }
        Err(e) => return Err(e.into()),
    }

    info!("Fetching and saving rain-related data");
    let counts = count_rain_events(&history, DateWindow::today(), &config.rain_keywords);
    RainInfoModel::new()
        .add_counts(RainInfoTable::Daily, &counts, time_util::today())
        .await?;

    info!("Main process completed");
    Ok(())
}
