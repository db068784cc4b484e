use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000009_create_order_table::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderLine::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderLine::Id))
                    .col(integer(OrderLine::Quantity))
                    .col(double(OrderLine::Price))
                    .col(text(OrderLine::Contents))
                    .col(integer(OrderLine::OrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_line_order_id")
                            .from(OrderLine::Table, OrderLine::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderLine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderLine {
    Table,
    Id,
    Quantity,
    Price,
    Contents,
    OrderId,
}
