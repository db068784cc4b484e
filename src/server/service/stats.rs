use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, stats::StatsRepository},
    error::AppError,
    model::stats::{EventAttendance, EventRevenue},
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets per-event ticket revenue for one club, erroring when the club
    /// does not exist. Events without tickets report zero.
    pub async fn revenue(&self, club_id: i32) -> Result<Vec<EventRevenue>, AppError> {
        self.check_club(club_id).await?;

        let repo = StatsRepository::new(self.db);

        Ok(repo.revenue_per_event(club_id).await?)
    }

    /// Gets per-event ticket counts for one club, erroring when the club
    /// does not exist.
    pub async fn attendance(&self, club_id: i32) -> Result<Vec<EventAttendance>, AppError> {
        self.check_club(club_id).await?;

        let repo = StatsRepository::new(self.db);

        Ok(repo.attendance_per_event(club_id).await?)
    }

    async fn check_club(&self, club_id: i32) -> Result<(), AppError> {
        if !ClubRepository::new(self.db).exists(club_id).await? {
            return Err(AppError::not_found("Discoteca", club_id));
        }

        Ok(())
    }
}
