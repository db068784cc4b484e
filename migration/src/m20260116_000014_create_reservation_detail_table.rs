use sea_orm_migration::{prelude::*, schema::*};

use super::{
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
                    .table(ReservationDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(ReservationDetail::Id))
                    .col(integer(ReservationDetail::Quantity))
                    .col(double(ReservationDetail::UnitPrice))
                    .col(integer(ReservationDetail::BottleId))
                    .col(integer(ReservationDetail::ReservationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_detail_bottle_id")
                            .from(ReservationDetail::Table, ReservationDetail::BottleId)
                            .to(Bottle::Table, Bottle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_detail_reservation_id")
                            .from(ReservationDetail::Table, ReservationDetail::ReservationId)
                            .to(BottleReservation::Table, BottleReservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationDetail {
    Table,
    Id,
    Quantity,
    UnitPrice,
    BottleId,
    ReservationId,
}
