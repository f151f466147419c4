use thiserror::Error;

/// 应用错误
#[derive(Error, Debug)]
pub enum AppError {
    /// 天气接口错误（不可达、非200、响应结构不对）
    #[error("天气API错误: {0}")]
    WeatherApiError(String),

    /// 数据库错误
    #[error("数据库错误: {0}")]
    DbError(String),

    /// 窗口内没有任何样本，对应的汇总行无法生成
    #[error("窗口 [{0}] 内没有样本数据")]
    EmptyWindow(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),
}

/// 把任何错误转换为AppError
pub fn to_err<E: std::error::Error + Send + Sync + 'static>(err: E) -> AppError {
    AppError::WeatherApiError(err.to_string())
}

impl From<rbatis::Error> for AppError {
    fn from(err: rbatis::Error) -> Self {
        AppError::DbError(err.to_string())
    }
}
