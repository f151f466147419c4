use std::env;

use once_cell::sync::OnceCell;
use rbatis::RBatis;
use rbdc_pg::driver::PgDriver;

static DB_CLIENT: OnceCell<RBatis> = OnceCell::new();

/// 初始化数据库连接池，整个进程只初始化一次
pub async fn init_db() -> &'static RBatis {
    let url = format!(
        "postgres://{}:{}@{}/{}",
        env::var("DB_USER").expect("DB_USER config is none"),
        env::var("DB_PASSWORD").expect("DB_PASSWORD config is none"),
        env::var("DB_HOST").expect("DB_HOST config is none"),
        env::var("DB_DATABASE").expect("DB_DATABASE config is none"),
    );
    let rb = RBatis::new();
    rb.link(PgDriver {}, &url).await.expect("link db error");

    DB_CLIENT.set(rb).expect("Failed to set DB_CLIENT");
    DB_CLIENT.get().expect("DB_CLIENT is not initialized")
}

pub fn get_db_client() -> &'static RBatis {
    DB_CLIENT.get().expect("DB_CLIENT is not initialized")
}
