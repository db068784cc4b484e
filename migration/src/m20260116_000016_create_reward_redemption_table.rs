use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000001_create_user_table::User, m20260116_000015_create_reward_table::Reward,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RewardRedemption::Table)
                    .if_not_exists()
                    .col(pk_auto(RewardRedemption::Id))
                    .col(integer(RewardRedemption::UserId))
                    .col(integer(RewardRedemption::RewardId))
                    .col(
                        timestamp(RewardRedemption::RedeemedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(RewardRedemption::PointsSpent))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_redemption_user_id")
                            .from(RewardRedemption::Table, RewardRedemption::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_redemption_reward_id")
                            .from(RewardRedemption::Table, RewardRedemption::RewardId)
                            .to(Reward::Table, Reward::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RewardRedemption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RewardRedemption {
    Table,
    Id,
    UserId,
    RewardId,
    RedeemedAt,
    PointsSpent,
}
