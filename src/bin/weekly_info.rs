use dotenv::dotenv;
use rust_weather::app_config::db::init_db;
use rust_weather::app_config::log::setup_logging;
use rust_weather::weather::task::weekly_job;
use rust_weather::weather::WeatherConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    setup_logging().await?;
    init_db().await;

    let config = WeatherConfig::load().await?;
    weekly_job::run(&config).await
}
