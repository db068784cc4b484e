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
                    .table(VipZone::Table)
                    .if_not_exists()
                    .col(pk_auto(VipZone::Id))
                    .col(string(VipZone::Name))
                    .col(text_null(VipZone::Description))
                    .col(integer(VipZone::MaxCapacity))
                    .col(string(VipZone::Status))
                    .col(integer(VipZone::ClubId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vip_zone_club_id")
                            .from(VipZone::Table, VipZone::ClubId)
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
            .drop_table(Table::drop().table(VipZone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VipZone {
    Table,
    Id,
    Name,
    Description,
    MaxCapacity,
    Status,
    ClubId,
}
