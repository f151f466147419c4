use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime};
use rust_weather::weather::collector::WeatherSample;
use rust_weather::weather::stats::statistics::{reduce, CityStatistics};
use rust_weather::weather::stats::window::DateWindow;

fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn sample(city_id: i32, temperature: f64, inserted_at: NaiveDateTime) -> WeatherSample {
    WeatherSample {
        city_id,
        temperature,
        description: "clear sky".to_string(),
        inserted_at,
    }
}

#[test]
fn test_single_sample_window() {
    // 单样本窗口：max = min = 该温度，标准差未定义（不是0）
    let history = vec![sample(1, 21.5, at(2024, 6, 3, 9))];
    let window = DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());

    let stats = reduce(&history, 1, window).unwrap();
    assert_eq!(stats.max, 21.5);
    assert_eq!(stats.min, 21.5);
    assert!(stats.std.is_none());
}

#[test]
fn test_sample_std() {
    let day = at(2024, 6, 3, 8);
    let history = vec![
        sample(1, 10.0, day),
        sample(1, 20.0, at(2024, 6, 3, 12)),
        sample(1, 30.0, at(2024, 6, 3, 16)),
    ];
    let window = DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());

    let stats = reduce(&history, 1, window).unwrap();
    assert_eq!(stats.max, 30.0);
    assert_eq!(stats.min, 10.0);
    assert_relative_eq!(stats.std.unwrap(), 10.0, epsilon = 1e-9);
}

#[test]
fn test_empty_window_returns_none() {
    let history = vec![sample(1, 20.0, at(2024, 6, 3, 9))];
    let yesterday = DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    assert!(reduce(&history, 1, yesterday).is_none());

    // 其他城市的样本不算进来
    assert!(reduce(&history, 2, DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())).is_none());
}

#[test]
fn test_point_window_drops_time_of_day() {
    // 同一天不同时刻都要落进点窗口
    let history = vec![
        sample(1, 10.0, at(2024, 6, 3, 0)),
        sample(1, 30.0, at(2024, 6, 3, 23)),
        sample(1, 99.0, at(2024, 6, 4, 0)),
    ];
    let window = DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());

    let stats = reduce(&history, 1, window).unwrap();
    assert_eq!(stats.max, 30.0);
    assert_eq!(stats.min, 10.0);
}

#[test]
fn test_open_window_includes_boundary() {
    let history = vec![
        sample(1, 5.0, at(2024, 5, 27, 9)),
        sample(1, 15.0, at(2024, 5, 31, 9)),
        sample(1, 25.0, at(2024, 6, 3, 9)),
    ];
    // 从5月31日起（含）
    let window = DateWindow::Since(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());

    let stats = reduce(&history, 1, window).unwrap();
    assert_eq!(stats.max, 25.0);
    assert_eq!(stats.min, 15.0);
}

#[test]
fn test_empty_yesterday_does_not_affect_today() {
    // 昨日窗口为空时今日的归约照常成立，两个窗口互相独立
    let history = vec![
        sample(1, 20.0, at(2024, 6, 3, 9)),
        sample(1, 24.0, at(2024, 6, 3, 15)),
    ];
    let today = DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    let yesterday = DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());

    assert!(reduce(&history, 1, yesterday).is_none());
    let stats = reduce(&history, 1, today).unwrap();
    assert_eq!(stats.max, 24.0);
    assert_eq!(stats.min, 20.0);
}

#[test]
fn test_city_statistics_partial_windows() {
    // CityStatistics 按城市算四个窗口，窗口之间空/非空互不影响
    let history = vec![
        sample(1, 18.0, at(2024, 6, 3, 9)),
        sample(2, 30.0, at(2024, 6, 3, 9)),
    ];
    let stats = CityStatistics {
        city_id: 1,
        today: reduce(&history, 1, DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())),
        yesterday: reduce(&history, 1, DateWindow::On(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())),
        current_week: reduce(&history, 1, DateWindow::Since(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())),
        last_7_days: reduce(&history, 1, DateWindow::Since(NaiveDate::from_ymd_opt(2024, 5, 27).unwrap())),
    };
    assert!(stats.today.is_some());
    assert!(stats.yesterday.is_none());
    assert!(stats.current_week.is_some());
    assert!(stats.last_7_days.is_some());
}
