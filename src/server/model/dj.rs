use crate::model::dj::{CreateDjDto, DjDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Dj {
    pub id: i32,
    pub stage_name: String,
    pub real_name: Option<String>,
    pub bio: Option<String>,
    pub genre: Option<String>,
    pub contact: Option<String>,
    pub image: Option<String>,
}

impl Dj {
    pub fn from_entity(entity: entity::dj::Model) -> Self {
        Self {
            id: entity.id,
            stage_name: entity.stage_name,
            real_name: entity.real_name,
            bio: entity.bio,
            genre: entity.genre,
            contact: entity.contact,
            image: entity.image,
        }
    }

    pub fn into_dto(self) -> DjDto {
        DjDto {
            id: self.id,
            stage_name: self.stage_name,
            real_name: self.real_name,
            bio: self.bio,
            genre: self.genre,
            contact: self.contact,
            image: self.image,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DjParams {
    pub stage_name: String,
    pub real_name: Option<String>,
    pub bio: Option<String>,
    pub genre: Option<String>,
    pub contact: Option<String>,
    pub image: Option<String>,
}

impl DjParams {
    pub fn from_dto(dto: CreateDjDto) -> Self {
        Self {
            stage_name: dto.stage_name,
            real_name: dto.real_name,
            bio: dto.bio,
            genre: dto.genre,
            contact: dto.contact,
            image: dto.image,
        }
    }
}
