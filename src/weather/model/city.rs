use rbatis::{crud, impl_select, RBatis};
use serde::{Deserialize, Serialize};

use crate::app_config::db::get_db_client;
use crate::error::AppError;

/// table
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct CityEntity {
    pub id: i32,
    pub city: String,
}

crud!(CityEntity {}, "city");
impl_select!(CityEntity{fetch_list() => "`order by id asc`"}, "city");

pub struct CityModel {
    db: &'static RBatis,
}

impl CityModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client(),
        }
    }

    /// 按 id 升序取全部城市。顺序即 city_id 分配的依据，不能变
    pub async fn get_all(&self) -> Result<Vec<CityEntity>, AppError> {
        let results = CityEntity::fetch_list(self.db).await?;
        Ok(results)
    }
}
