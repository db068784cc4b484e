use crate::server::data::event::EventRepository;
use entity::EventStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active_by_club;
