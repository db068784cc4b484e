use crate::model::bottle::{BottleDto, CreateBottleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Bottle {
    pub id: i32,
    pub name: String,
    pub bottle_type: String,
    pub size: String,
    pub price: f64,
    pub available: bool,
    pub image: Option<String>,
    pub club_id: i32,
}

impl Bottle {
    pub fn from_entity(entity: entity::bottle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            bottle_type: entity.bottle_type,
            size: entity.size,
            price: entity.price,
            available: entity.available,
            image: entity.image,
            club_id: entity.club_id,
        }
    }

    pub fn into_dto(self) -> BottleDto {
        BottleDto {
            id: self.id,
            name: self.name,
            bottle_type: self.bottle_type,
            size: self.size,
            price: self.price,
            available: self.available,
            image: self.image,
            club_id: self.club_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BottleParams {
    pub name: String,
    pub bottle_type: String,
    pub size: String,
    pub price: f64,
    pub available: bool,
    pub image: Option<String>,
    pub club_id: i32,
}

impl BottleParams {
    pub fn from_dto(dto: CreateBottleDto) -> Self {
        Self {
            name: dto.name,
            bottle_type: dto.bottle_type,
            size: dto.size,
            price: dto.price,
            available: dto.available.unwrap_or(true),
            image: dto.image,
            club_id: dto.club_id,
        }
    }
}
