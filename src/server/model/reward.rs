use chrono::{DateTime, Utc};

use crate::model::reward::{CreateRewardDto, RedemptionDto, RewardDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    pub id: i32,
    pub name: String,
    pub points_required: i32,
    pub description: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub bottle_id: i32,
    pub reservation_id: i32,
    pub ticket_id: i32,
    pub event_id: i32,
}

impl Reward {
    pub fn from_entity(entity: entity::reward::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            points_required: entity.points_required,
            description: entity.description,
            valid_from: entity.valid_from,
            valid_until: entity.valid_until,
            bottle_id: entity.bottle_id,
            reservation_id: entity.reservation_id,
            ticket_id: entity.ticket_id,
            event_id: entity.event_id,
        }
    }

    pub fn into_dto(self) -> RewardDto {
        RewardDto {
            id: self.id,
            name: self.name,
            points_required: self.points_required,
            description: self.description,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            bottle_id: self.bottle_id,
            reservation_id: self.reservation_id,
            ticket_id: self.ticket_id,
            event_id: self.event_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewardParams {
    pub name: String,
    pub points_required: i32,
    pub description: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub bottle_id: i32,
    pub reservation_id: i32,
    pub ticket_id: i32,
    pub event_id: i32,
}

impl RewardParams {
    pub fn from_dto(dto: CreateRewardDto) -> Self {
        Self {
            name: dto.name,
            points_required: dto.points_required,
            description: dto.description,
            valid_from: dto.valid_from,
            valid_until: dto.valid_until,
            bottle_id: dto.bottle_id,
            reservation_id: dto.reservation_id,
            ticket_id: dto.ticket_id,
            event_id: dto.event_id,
        }
    }
}

/// A recorded redemption together with the points the caller has left.
#[derive(Debug, Clone, PartialEq)]
pub struct Redemption {
    pub id: i32,
    pub user_id: i32,
    pub reward_id: i32,
    pub redeemed_at: DateTime<Utc>,
    pub points_spent: i32,
    pub points_remaining: i32,
}

impl Redemption {
    pub fn from_entity(entity: entity::reward_redemption::Model, points_remaining: i32) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            reward_id: entity.reward_id,
            redeemed_at: entity.redeemed_at,
            points_spent: entity.points_spent,
            points_remaining,
        }
    }

    pub fn into_dto(self) -> RedemptionDto {
        RedemptionDto {
            id: self.id,
            user_id: self.user_id,
            reward_id: self.reward_id,
            redeemed_at: self.redeemed_at,
            points_spent: self.points_spent,
            points_remaining: self.points_remaining,
        }
    }
}
