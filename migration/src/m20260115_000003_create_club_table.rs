use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000002_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(pk_auto(Club::Id))
                    .col(string(Club::Name))
                    .col(string(Club::Address))
                    .col(text_null(Club::Description))
                    .col(integer(Club::Capacity))
                    .col(text_null(Club::Image))
                    .col(integer(Club::CityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_city_id")
                            .from(Club::Table, Club::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    Address,
    Description,
    Capacity,
    Image,
    CityId,
}
