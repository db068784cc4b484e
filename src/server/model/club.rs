use crate::model::club::{ClubDto, CreateClubDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub image: Option<String>,
    pub city_id: i32,
}

impl Club {
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            description: entity.description,
            capacity: entity.capacity,
            image: entity.image,
            city_id: entity.city_id,
        }
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
            address: self.address,
            description: self.description,
            capacity: self.capacity,
            image: self.image,
            city_id: self.city_id,
        }
    }
}

/// Parameters for creating or replacing a club. `admin_user_id` links an
/// existing user as administrator at creation time; it is ignored on update.
#[derive(Debug, Clone)]
pub struct ClubParams {
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub image: Option<String>,
    pub city_id: i32,
    pub admin_user_id: Option<i32>,
}

impl ClubParams {
    pub fn from_dto(dto: CreateClubDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            description: dto.description,
            capacity: dto.capacity,
            image: dto.image,
            city_id: dto.city_id,
            admin_user_id: dto.admin_user_id,
        }
    }
}
