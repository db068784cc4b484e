use chrono::{DateTime, Utc};
use entity::EventStatus;

use crate::{
    model::event::{CreateEventDto, EventDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub description: Option<String>,
    pub entry_price: f64,
    pub reserved_price: f64,
    pub capacity: i32,
    pub event_type: String,
    pub status: EventStatus,
    pub image: Option<String>,
    pub club_id: i32,
    pub dj_id: i32,
    pub created_by: i32,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            starts_at: entity.starts_at,
            description: entity.description,
            entry_price: entity.entry_price,
            reserved_price: entity.reserved_price,
            capacity: entity.capacity,
            event_type: entity.event_type,
            status: entity.status,
            image: entity.image,
            club_id: entity.club_id,
            dj_id: entity.dj_id,
            created_by: entity.created_by,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            name: self.name,
            starts_at: self.starts_at,
            description: self.description,
            entry_price: self.entry_price,
            reserved_price: self.reserved_price,
            capacity: self.capacity,
            event_type: self.event_type,
            status: self.status.as_str().to_string(),
            image: self.image,
            club_id: self.club_id,
            dj_id: self.dj_id,
            created_by: self.created_by,
        }
    }
}

/// Parameters for creating or replacing an event.
#[derive(Debug, Clone)]
pub struct EventParams {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub description: Option<String>,
    pub entry_price: f64,
    pub reserved_price: f64,
    pub capacity: i32,
    pub event_type: String,
    pub status: EventStatus,
    pub image: Option<String>,
    pub club_id: i32,
    pub dj_id: i32,
    pub created_by: i32,
}

impl EventParams {
    /// Converts the wire DTO, rejecting unknown status strings. A missing
    /// status defaults to ACTIVO.
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, AppError> {
        let status = match dto.status {
            Some(raw) => parse_event_status(&raw)?,
            None => EventStatus::Activo,
        };

        Ok(Self {
            name: dto.name,
            starts_at: dto.starts_at,
            description: dto.description,
            entry_price: dto.entry_price,
            reserved_price: dto.reserved_price,
            capacity: dto.capacity,
            event_type: dto.event_type,
            status,
            image: dto.image,
            club_id: dto.club_id,
            dj_id: dto.dj_id,
            created_by: dto.created_by,
        })
    }
}

pub fn parse_event_status(raw: &str) -> Result<EventStatus, AppError> {
    match raw {
        "ACTIVO" => Ok(EventStatus::Activo),
        "CANCELADO" => Ok(EventStatus::Cancelado),
        "FINALIZADO" => Ok(EventStatus::Finalizado),
        other => Err(AppError::BadRequest(format!(
            "Estado de evento no válido: {}",
            other
        ))),
    }
}
