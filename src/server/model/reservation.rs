use crate::model::reservation::{
    BottleReservationDto, CreateBottleReservationDto, CreateReservationDetailDto,
    ReservationDetailDto,
};

/// A bottle reservation with its per-bottle details.
#[derive(Debug, Clone, PartialEq)]
pub struct BottleReservation {
    pub id: i32,
    pub guest_count: i32,
    pub total: f64,
    pub reservation_type: String,
    pub ticket_id: i32,
    pub vip_zone_id: i32,
    pub details: Vec<ReservationDetail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetail {
    pub id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub bottle_id: i32,
    pub reservation_id: i32,
}

impl BottleReservation {
    pub fn from_entities(
        reservation: entity::bottle_reservation::Model,
        details: Vec<entity::reservation_detail::Model>,
    ) -> Self {
        Self {
            id: reservation.id,
            guest_count: reservation.guest_count,
            total: reservation.total,
            reservation_type: reservation.reservation_type,
            ticket_id: reservation.ticket_id,
            vip_zone_id: reservation.vip_zone_id,
            details: details
                .into_iter()
                .map(ReservationDetail::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> BottleReservationDto {
        BottleReservationDto {
            id: self.id,
            guest_count: self.guest_count,
            total: self.total,
            reservation_type: self.reservation_type,
            ticket_id: self.ticket_id,
            vip_zone_id: self.vip_zone_id,
            details: self
                .details
                .into_iter()
                .map(ReservationDetail::into_dto)
                .collect(),
        }
    }
}

impl ReservationDetail {
    pub fn from_entity(entity: entity::reservation_detail::Model) -> Self {
        Self {
            id: entity.id,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            bottle_id: entity.bottle_id,
            reservation_id: entity.reservation_id,
        }
    }

    pub fn into_dto(self) -> ReservationDetailDto {
        ReservationDetailDto {
            id: self.id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            bottle_id: self.bottle_id,
            reservation_id: self.reservation_id,
        }
    }
}

/// Parameters for creating or replacing a reservation with its details.
#[derive(Debug, Clone)]
pub struct ReservationParams {
    pub guest_count: i32,
    pub total: f64,
    pub reservation_type: String,
    pub ticket_id: i32,
    pub vip_zone_id: i32,
    pub details: Vec<ReservationDetailParams>,
}

#[derive(Debug, Clone)]
pub struct ReservationDetailParams {
    pub quantity: i32,
    pub unit_price: f64,
    pub bottle_id: i32,
}

impl ReservationParams {
    pub fn from_dto(dto: CreateBottleReservationDto) -> Self {
        Self {
            guest_count: dto.guest_count,
            total: dto.total,
            reservation_type: dto.reservation_type,
            ticket_id: dto.ticket_id,
            vip_zone_id: dto.vip_zone_id,
            details: dto
                .details
                .into_iter()
                .map(ReservationDetailParams::from_dto)
                .collect(),
        }
    }
}

impl ReservationDetailParams {
    pub fn from_dto(dto: CreateReservationDetailDto) -> Self {
        Self {
            quantity: dto.quantity,
            unit_price: dto.unit_price,
            bottle_id: dto.bottle_id,
        }
    }
}
