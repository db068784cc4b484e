use chrono::NaiveTime;

use crate::model::time_slot::{CreateTimeSlotDto, TimeSlotDto};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub id: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub price_multiplier: f64,
    pub club_id: i32,
}

impl TimeSlot {
    pub fn from_entity(entity: entity::time_slot::Model) -> Self {
        Self {
            id: entity.id,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            price_multiplier: entity.price_multiplier,
            club_id: entity.club_id,
        }
    }

    pub fn into_dto(self) -> TimeSlotDto {
        TimeSlotDto {
            id: self.id,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            price_multiplier: self.price_multiplier,
            club_id: self.club_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimeSlotParams {
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub price_multiplier: f64,
    pub club_id: i32,
}

impl TimeSlotParams {
    pub fn from_dto(dto: CreateTimeSlotDto) -> Self {
        Self {
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            price_multiplier: dto.price_multiplier,
            club_id: dto.club_id,
        }
    }
}
