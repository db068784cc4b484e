use chrono::{DateTime, Utc};

use crate::model::ticket::{CreateTicketDto, TicketDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub ticket_type: String,
    pub purchased_at: DateTime<Utc>,
    pub price: f64,
    pub user_id: i32,
    pub event_id: i32,
    pub time_slot_id: i32,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            ticket_type: entity.ticket_type,
            purchased_at: entity.purchased_at,
            price: entity.price,
            user_id: entity.user_id,
            event_id: entity.event_id,
            time_slot_id: entity.time_slot_id,
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            ticket_type: self.ticket_type,
            purchased_at: self.purchased_at,
            price: self.price,
            user_id: self.user_id,
            event_id: self.event_id,
            time_slot_id: self.time_slot_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicketParams {
    pub ticket_type: String,
    pub price: f64,
    pub user_id: i32,
    pub event_id: i32,
    pub time_slot_id: i32,
}

impl TicketParams {
    pub fn from_dto(dto: CreateTicketDto) -> Self {
        Self {
            ticket_type: dto.ticket_type,
            price: dto.price,
            user_id: dto.user_id,
            event_id: dto.event_id,
            time_slot_id: dto.time_slot_id,
        }
    }
}
