use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        bottle::BottleRepository, event::EventRepository, reservation::ReservationRepository,
        reward::RewardRepository, ticket::TicketRepository, user::UserRepository,
    },
    error::AppError,
    model::reward::{Redemption, Reward, RewardParams},
};

const RESOURCE: &str = "Recompensa";

pub struct RewardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RewardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rewards
    pub async fn get_all(&self) -> Result<Vec<Reward>, AppError> {
        let repo = RewardRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a reward by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<Reward, AppError> {
        let repo = RewardRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Creates a new reward, resolving all four referenced rows first
    pub async fn create(&self, params: RewardParams) -> Result<Reward, AppError> {
        self.check_references(&params).await?;

        let repo = RewardRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a reward by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: RewardParams) -> Result<Reward, AppError> {
        self.check_references(&params).await?;

        let repo = RewardRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a reward, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RewardRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    /// Redeems a reward for the calling user.
    ///
    /// The reward must exist (404 otherwise), the current time must fall
    /// inside its validity window and the caller must hold at least
    /// `points_required` points (400 otherwise). On success exactly
    /// `points_required` points are deducted and a redemption row is
    /// recorded with the timestamp and points spent.
    pub async fn redeem(
        &self,
        reward_id: i32,
        user: &entity::user::Model,
    ) -> Result<Redemption, AppError> {
        let repo = RewardRepository::new(self.db);

        let reward = repo
            .find_by_id(reward_id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, reward_id))?;

        let now = Utc::now();
        if now < reward.valid_from || now > reward.valid_until {
            return Err(AppError::BadRequest(
                "La recompensa no está vigente".to_string(),
            ));
        }

        if user.reward_points < reward.points_required {
            return Err(AppError::BadRequest(
                "Puntos insuficientes para canjear la recompensa".to_string(),
            ));
        }

        let updated = UserRepository::new(self.db)
            .spend_reward_points(user.id, reward.points_required)
            .await?
            .ok_or_else(|| AppError::not_found("Usuario", user.id))?;

        let redemption = repo
            .insert_redemption(user.id, reward_id, reward.points_required)
            .await?;

        Ok(Redemption::from_entity(redemption, updated.reward_points))
    }

    async fn check_references(&self, params: &RewardParams) -> Result<(), AppError> {
        if !BottleRepository::new(self.db)
            .exists(params.bottle_id)
            .await?
        {
            return Err(AppError::not_found("Botella", params.bottle_id));
        }
        if !ReservationRepository::new(self.db)
            .exists(params.reservation_id)
            .await?
        {
            return Err(AppError::not_found("ReservaBotella", params.reservation_id));
        }
        if !TicketRepository::new(self.db)
            .exists(params.ticket_id)
            .await?
        {
            return Err(AppError::not_found("Entrada", params.ticket_id));
        }
        if !EventRepository::new(self.db).exists(params.event_id).await? {
            return Err(AppError::not_found("Evento", params.event_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn redeem_deducts_points_and_records_row() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_owner, reward) = factory::helpers::create_reward_with_dependencies(db)
            .await
            .unwrap();
        let redeemer = factory::user::UserFactory::new(db)
            .reward_points(500)
            .build()
            .await
            .unwrap();

        let service = RewardService::new(db);
        let redemption = service.redeem(reward.id, &redeemer).await.unwrap();

        assert_eq!(redemption.reward_id, reward.id);
        assert_eq!(redemption.user_id, redeemer.id);
        assert_eq!(redemption.points_spent, reward.points_required);
        assert_eq!(redemption.points_remaining, 500 - reward.points_required);

        let stored = UserRepository::new(db)
            .find_by_id(redeemer.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.reward_points, 500 - reward.points_required);
    }

    #[tokio::test]
    async fn redeem_rejects_insufficient_points() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_owner, reward) = factory::helpers::create_reward_with_dependencies(db)
            .await
            .unwrap();
        let redeemer = factory::user::UserFactory::new(db)
            .reward_points(reward.points_required - 1)
            .build()
            .await
            .unwrap();

        let service = RewardService::new(db);
        let result = service.redeem(reward.id, &redeemer).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let stored = UserRepository::new(db)
            .find_by_id(redeemer.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.reward_points, reward.points_required - 1);
    }

    #[tokio::test]
    async fn redeem_rejects_expired_window() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_owner, club, ticket, _zone, reservation) =
            factory::helpers::create_reservation_with_dependencies(db)
                .await
                .unwrap();
        let bottle = factory::create_bottle(db, club.id).await.unwrap();
        let expired = factory::reward::RewardFactory::new(
            db,
            bottle.id,
            reservation.id,
            ticket.id,
            ticket.event_id,
        )
        .valid_from(Utc::now() - Duration::days(30))
        .valid_until(Utc::now() - Duration::days(1))
        .build()
        .await
        .unwrap();

        let redeemer = factory::user::UserFactory::new(db)
            .reward_points(500)
            .build()
            .await
            .unwrap();

        let service = RewardService::new(db);
        let result = service.redeem(expired.id, &redeemer).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn redeem_rejects_missing_reward() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let redeemer = factory::create_user(db).await.unwrap();

        let service = RewardService::new(db);
        let result = service.redeem(42, &redeemer).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
