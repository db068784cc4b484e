use crate::model::city::{CityDto, CreateCityDto};

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub province: String,
    pub country: String,
    pub postal_code: String,
}

impl City {
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            province: entity.province,
            country: entity.country,
            postal_code: entity.postal_code,
        }
    }

    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
            province: self.province,
            country: self.country,
            postal_code: self.postal_code,
        }
    }
}

/// Parameters for creating or replacing a city.
#[derive(Debug, Clone)]
pub struct CityParams {
    pub name: String,
    pub province: String,
    pub country: String,
    pub postal_code: String,
}

impl CityParams {
    pub fn from_dto(dto: CreateCityDto) -> Self {
        Self {
            name: dto.name,
            province: dto.province,
            country: dto.country,
            postal_code: dto.postal_code,
        }
    }
}
