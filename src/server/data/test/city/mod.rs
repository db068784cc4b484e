use crate::server::{data::city::CityRepository, model::city::CityParams};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod delete;
mod update;

fn params(name: &str) -> CityParams {
    CityParams {
        name: name.to_string(),
        province: "Madrid".to_string(),
        country: "España".to_string(),
        postal_code: "28001".to_string(),
    }
}
