pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_user_table;
mod m20260115_000002_create_city_table;
mod m20260115_000003_create_club_table;
mod m20260115_000004_create_dj_table;
mod m20260115_000005_create_user_club_table;
mod m20260115_000006_create_time_slot_table;
mod m20260115_000007_create_event_table;
mod m20260115_000008_create_ticket_table;
mod m20260115_000009_create_order_table;
mod m20260115_000010_create_order_line_table;
mod m20260115_000011_create_vip_zone_table;
mod m20260116_000012_create_bottle_table;
mod m20260116_000013_create_bottle_reservation_table;
mod m20260116_000014_create_reservation_detail_table;
mod m20260116_000015_create_reward_table;
mod m20260116_000016_create_reward_redemption_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_user_table::Migration),
            Box::new(m20260115_000002_create_city_table::Migration),
            Box::new(m20260115_000003_create_club_table::Migration),
            Box::new(m20260115_000004_create_dj_table::Migration),
            Box::new(m20260115_000005_create_user_club_table::Migration),
            Box::new(m20260115_000006_create_time_slot_table::Migration),
            Box::new(m20260115_000007_create_event_table::Migration),
            Box::new(m20260115_000008_create_ticket_table::Migration),
            Box::new(m20260115_000009_create_order_table::Migration),
            Box::new(m20260115_000010_create_order_line_table::Migration),
            Box::new(m20260115_000011_create_vip_zone_table::Migration),
            Box::new(m20260116_000012_create_bottle_table::Migration),
            Box::new(m20260116_000013_create_bottle_reservation_table::Migration),
            Box::new(m20260116_000014_create_reservation_detail_table::Migration),
            Box::new(m20260116_000015_create_reward_table::Migration),
            Box::new(m20260116_000016_create_reward_redemption_table::Migration),
        ]
    }
}
