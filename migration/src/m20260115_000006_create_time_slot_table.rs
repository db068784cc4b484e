use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000003_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeSlot::Id))
                    .col(time(TimeSlot::StartsAt))
                    .col(time(TimeSlot::EndsAt))
                    .col(double(TimeSlot::PriceMultiplier).default(1.0))
                    .col(integer(TimeSlot::ClubId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_slot_club_id")
                            .from(TimeSlot::Table, TimeSlot::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeSlot {
    Table,
    Id,
    StartsAt,
    EndsAt,
    PriceMultiplier,
    ClubId,
}
