use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000001_create_user_table::User, m20260115_000003_create_club_table::Club,
    m20260115_000004_create_dj_table::Dj,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(timestamp(Event::StartsAt))
                    .col(text_null(Event::Description))
                    .col(double(Event::EntryPrice))
                    .col(double(Event::ReservedPrice))
                    .col(integer(Event::Capacity))
                    .col(string(Event::EventType))
                    .col(string(Event::Status))
                    .col(text_null(Event::Image))
                    .col(integer(Event::ClubId))
                    .col(integer(Event::DjId))
                    .col(integer(Event::CreatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_club_id")
                            .from(Event::Table, Event::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_dj_id")
                            .from(Event::Table, Event::DjId)
                            .to(Dj::Table, Dj::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_created_by")
                            .from(Event::Table, Event::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
    StartsAt,
    Description,
    EntryPrice,
    ReservedPrice,
    Capacity,
    EventType,
    Status,
    Image,
    ClubId,
    DjId,
    CreatedBy,
}
