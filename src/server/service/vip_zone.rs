use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, vip_zone::VipZoneRepository},
    error::AppError,
    model::vip_zone::{VipZone, VipZoneParams},
};

const RESOURCE: &str = "ZonaVip";

pub struct VipZoneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VipZoneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all VIP zones
    pub async fn get_all(&self) -> Result<Vec<VipZone>, AppError> {
        let repo = VipZoneRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a VIP zone by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<VipZone, AppError> {
        let repo = VipZoneRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Gets the VIP zones of one club
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<VipZone>, AppError> {
        let repo = VipZoneRepository::new(self.db);

        Ok(repo.get_by_club(club_id).await?)
    }

    /// Creates a new VIP zone, resolving its club first
    pub async fn create(&self, params: VipZoneParams) -> Result<VipZone, AppError> {
        self.check_references(&params).await?;

        let repo = VipZoneRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces a VIP zone by path ID, erroring when the ID has no row
    pub async fn update(&self, id: i32, params: VipZoneParams) -> Result<VipZone, AppError> {
        self.check_references(&params).await?;

        let repo = VipZoneRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes a VIP zone, erroring when the ID has no row
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = VipZoneRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &VipZoneParams) -> Result<(), AppError> {
        if !ClubRepository::new(self.db).exists(params.club_id).await? {
            return Err(AppError::not_found("Discoteca", params.club_id));
        }

        Ok(())
    }
}
