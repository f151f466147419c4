pub mod city;
pub mod high_low;
pub mod hourly_weather;
pub mod rain_info;
pub mod statistic;
