use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
mod wallet_and_points;

fn create_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Ana".to_string(),
        email: email.to_string(),
        password_hash: "00$00".to_string(),
        role: UserRole::Cliente,
    }
}
