use tracing::debug;

use crate::weather::collector::WeatherSample;
use crate::weather::stats::window::{filter_city_window, DateWindow};

/// 一个窗口内单个城市的温度统计
///
/// std 是样本标准差(n-1)。窗口内只有一个样本时标准差在数学上没有定义，
/// 此时为 None，调用方不能把它当成 0。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempStats {
    pub max: f64,
    pub min: f64,
    pub std: Option<f64>,
}

/// 对指定城市在指定窗口内的温度做归约，窗口为空时返回 None
pub fn reduce(history: &[WeatherSample], city_id: i32, window: DateWindow) -> Option<TempStats> {
    let samples = filter_city_window(history, city_id, window);
    if samples.is_empty() {
        return None;
    }

    let temps: Vec<f64> = samples.iter().map(|s| s.temperature).collect();
    let max = temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = temps.iter().cloned().fold(f64::INFINITY, f64::min);
    let std = sample_std(&temps);

    Some(TempStats { max, min, std })
}

/// 样本标准差，少于2个点时未定义
fn sample_std(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

/// 单个城市在四个标准窗口（今天/昨天/本周/近7天）上的统计
///
/// 四个窗口互相独立，按需分别计算。
#[derive(Debug, Clone)]
pub struct CityStatistics {
    pub city_id: i32,
    pub today: Option<TempStats>,
    pub yesterday: Option<TempStats>,
    pub current_week: Option<TempStats>,
    pub last_7_days: Option<TempStats>,
}

impl CityStatistics {
    pub fn compute(history: &[WeatherSample], city_id: i32) -> Self {
        debug!("计算城市统计 city_id={}", city_id);
        CityStatistics {
            city_id,
            today: reduce(history, city_id, DateWindow::today()),
            yesterday: reduce(history, city_id, DateWindow::yesterday()),
            current_week: reduce(history, city_id, DateWindow::current_week()),
            last_7_days: reduce(history, city_id, DateWindow::last_7_days()),
        }
    }
}
