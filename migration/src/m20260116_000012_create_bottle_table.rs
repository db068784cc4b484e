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
                    .table(Bottle::Table)
                    .if_not_exists()
                    .col(pk_auto(Bottle::Id))
                    .col(string(Bottle::Name))
                    .col(string(Bottle::BottleType))
                    .col(string(Bottle::Size))
                    .col(double(Bottle::Price))
                    .col(boolean(Bottle::Available).default(true))
                    .col(text_null(Bottle::Image))
                    .col(integer(Bottle::ClubId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bottle_club_id")
                            .from(Bottle::Table, Bottle::ClubId)
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
            .drop_table(Table::drop().table(Bottle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bottle {
    Table,
    Id,
    Name,
    BottleType,
    Size,
    Price,
    Available,
    Image,
    ClubId,
}
