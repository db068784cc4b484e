use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000007_create_event_table::Event, m20260115_000008_create_ticket_table::Ticket,
    m20260116_000012_create_bottle_table::Bottle,
    m20260116_000013_create_bottle_reservation_table::BottleReservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reward::Table)
                    .if_not_exists()
                    .col(pk_auto(Reward::Id))
                    .col(string(Reward::Name))
                    .col(integer(Reward::PointsRequired))
                    .col(text_null(Reward::Description))
                    .col(timestamp(Reward::ValidFrom))
                    .col(timestamp(Reward::ValidUntil))
                    .col(integer(Reward::BottleId))
                    .col(integer(Reward::ReservationId))
                    .col(integer(Reward::TicketId))
                    .col(integer(Reward::EventId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_bottle_id")
                            .from(Reward::Table, Reward::BottleId)
                            .to(Bottle::Table, Bottle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_reservation_id")
                            .from(Reward::Table, Reward::ReservationId)
                            .to(BottleReservation::Table, BottleReservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_ticket_id")
                            .from(Reward::Table, Reward::TicketId)
                            .to(Ticket::Table, Ticket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_event_id")
                            .from(Reward::Table, Reward::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reward {
    Table,
    Id,
    Name,
    PointsRequired,
    Description,
    ValidFrom,
    ValidUntil,
    BottleId,
    ReservationId,
    TicketId,
    EventId,
}
