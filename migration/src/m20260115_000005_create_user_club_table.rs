use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000001_create_user_table::User, m20260115_000003_create_club_table::Club,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserClub::Table)
                    .if_not_exists()
                    .col(integer(UserClub::UserId))
                    .col(integer(UserClub::ClubId))
                    .primary_key(
                        Index::create()
                            .col(UserClub::UserId)
                            .col(UserClub::ClubId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_club_user_id")
                            .from(UserClub::Table, UserClub::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_club_club_id")
                            .from(UserClub::Table, UserClub::ClubId)
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
            .drop_table(Table::drop().table(UserClub::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserClub {
    Table,
    UserId,
    ClubId,
}
