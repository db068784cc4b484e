use crate::model::vip_zone::{CreateVipZoneDto, VipZoneDto};

#[derive(Debug, Clone, PartialEq)]
pub struct VipZone {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub max_capacity: i32,
    pub status: String,
    pub club_id: i32,
}

impl VipZone {
    pub fn from_entity(entity: entity::vip_zone::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            max_capacity: entity.max_capacity,
            status: entity.status,
            club_id: entity.club_id,
        }
    }

    pub fn into_dto(self) -> VipZoneDto {
        VipZoneDto {
            id: self.id,
            name: self.name,
            description: self.description,
            max_capacity: self.max_capacity,
            status: self.status,
            club_id: self.club_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VipZoneParams {
    pub name: String,
    pub description: Option<String>,
    pub max_capacity: i32,
    pub status: String,
    pub club_id: i32,
}

impl VipZoneParams {
    pub fn from_dto(dto: CreateVipZoneDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            max_capacity: dto.max_capacity,
            status: dto.status,
            club_id: dto.club_id,
        }
    }
}
