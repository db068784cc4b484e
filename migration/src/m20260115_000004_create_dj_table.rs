use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dj::Table)
                    .if_not_exists()
                    .col(pk_auto(Dj::Id))
                    .col(string(Dj::StageName))
                    .col(string_null(Dj::RealName))
                    .col(text_null(Dj::Bio))
                    .col(string_null(Dj::Genre))
                    .col(string_null(Dj::Contact))
                    .col(text_null(Dj::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dj::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dj {
    Table,
    Id,
    StageName,
    RealName,
    Bio,
    Genre,
    Contact,
    Image,
}
