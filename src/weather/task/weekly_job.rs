use anyhow::Result;
use tracing::{error, info};

use crate::error::AppError;
use crate::time_util;
use crate::weather::model::high_low::{HighLowEntity, HighLowModel, HighLowTable};
use crate::weather::model::hourly_weather::HourlyWeatherModel;
use crate::weather::model::rain_info::{RainInfoModel, RainInfoTable};
use crate::weather::stats::{count_rain_events, pick_extremes, DateWindow};
use crate::weather::WeatherConfig;

/// 周任务：只从历史重新推导，不采样
pub async fn run(config: &WeatherConfig) -> Result<()> {
    info!("Starting weekly statistics processing");
    let current_time = time_util::now_second();

    let week_start = time_util::week_start();
    info!("本周起始日: {}", week_start);

    let history = HourlyWeatherModel::new().get_history(week_start).await?;

    match pick_extremes(&history, DateWindow::current_week()) {
        Ok(high_low) => {
            info!("Saving weekly high and low temperature data to the database");
            let entity = HighLowEntity::from_high_low(&high_low, &current_time);
            HighLowModel::new()
                .add(HighLowTable::Weekly, &entity)
                .await?;
        }
        Err(AppError::EmptyWindow(label)) => {
            error!("本周窗口 [{}] 没有样本, 放弃 weekly_high_low 这一行", label);
        }
        Err(e) => return Err(e.into()),
    }

    let counts = count_rain_events(&history, DateWindow::current_week(), &config.rain_keywords);
    info!("Saving weekly rain information to the database");
    RainInfoModel::new()
        .add_counts(RainInfoTable::Weekly, &counts, time_util::today())
        .await?;

    info!("Weekly statistics processing completed");
    Ok(())
}
