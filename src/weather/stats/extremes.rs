use tracing::info;

use crate::error::AppError;
use crate::weather::collector::WeatherSample;
use crate::weather::stats::window::{filter_window, DateWindow};

/// 窗口内全部城市的最高/最低温及持有者
///
/// 两个 city_id 可以相同（同一个城市同时持有最高和最低记录）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighLow {
    pub highest_temp_city_id: i32,
    pub lowest_temp_city_id: i32,
    pub highest_temp: f64,
    pub lowest_temp: f64,
}

/// 在窗口内跨全部城市取最高/最低温度
///
/// 多个城市并列时取history枚举顺序中的第一条（确定性规则，和原始行为保持一致）。
/// 窗口为空时返回 EmptyWindow 错误：这一行汇总无法合成，由调用方决定放弃该行。
pub fn pick_extremes(history: &[WeatherSample], window: DateWindow) -> Result<HighLow, AppError> {
    let samples = filter_window(history, window);
    if samples.is_empty() {
        return Err(AppError::EmptyWindow(window.label()));
    }

    // first match wins: 严格大于/小于才换人，并列保留先出现的那条
    let mut high = samples[0];
    let mut low = samples[0];
    for &sample in &samples[1..] {
        if sample.temperature > high.temperature {
            high = sample;
        }
        if sample.temperature < low.temperature {
            low = sample;
        }
    }

    info!(
        "窗口 [{}] 最高温: {} (city_id={}), 最低温: {} (city_id={})",
        window.label(),
        high.temperature,
        high.city_id,
        low.temperature,
        low.city_id
    );
    Ok(HighLow {
        highest_temp_city_id: high.city_id,
        lowest_temp_city_id: low.city_id,
        highest_temp: high.temperature,
        lowest_temp: low.temperature,
    })
}
