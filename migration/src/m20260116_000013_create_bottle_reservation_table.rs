use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000008_create_ticket_table::Ticket, m20260115_000011_create_vip_zone_table::VipZone,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BottleReservation::Table)
                    .if_not_exists()
                    .col(pk_auto(BottleReservation::Id))
                    .col(integer(BottleReservation::GuestCount))
                    .col(double(BottleReservation::Total))
                    .col(string(BottleReservation::ReservationType))
                    .col(integer(BottleReservation::TicketId))
                    .col(integer(BottleReservation::VipZoneId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bottle_reservation_ticket_id")
                            .from(BottleReservation::Table, BottleReservation::TicketId)
                            .to(Ticket::Table, Ticket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bottle_reservation_vip_zone_id")
                            .from(BottleReservation::Table, BottleReservation::VipZoneId)
                            .to(VipZone::Table, VipZone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BottleReservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BottleReservation {
    Table,
    Id,
    GuestCount,
    Total,
    ReservationType,
    TicketId,
    VipZoneId,
}
