use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000001_create_user_table::User, m20260115_000006_create_time_slot_table::TimeSlot,
    m20260115_000007_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string(Ticket::TicketType))
                    .col(
                        timestamp(Ticket::PurchasedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(double(Ticket::Price))
                    .col(integer(Ticket::UserId))
                    .col(integer(Ticket::EventId))
                    .col(integer(Ticket::TimeSlotId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_user_id")
                            .from(Ticket::Table, Ticket::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_event_id")
                            .from(Ticket::Table, Ticket::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_time_slot_id")
                            .from(Ticket::Table, Ticket::TimeSlotId)
                            .to(TimeSlot::Table, TimeSlot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    TicketType,
    PurchasedAt,
    Price,
    UserId,
    EventId,
    TimeSlotId,
}
