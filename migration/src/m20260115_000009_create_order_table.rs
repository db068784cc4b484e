use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string(Order::Status))
                    .col(double(Order::Total))
                    .col(
                        timestamp(Order::OrderedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Order::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user_id")
                            .from(Order::Table, Order::UserId)
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
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    Status,
    Total,
    OrderedAt,
    UserId,
}
