use crate::server::data::stats::StatsRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod attendance_per_event;
mod revenue_per_event;
