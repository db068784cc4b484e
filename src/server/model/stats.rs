//! Aggregate statistics models.

use crate::model::stats::{EventAttendanceDto, EventRevenueDto};

/// Ticket revenue of one event. Events with no tickets report zero.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRevenue {
    pub event_id: i32,
    pub event_name: String,
    pub revenue: f64,
}

impl EventRevenue {
    pub fn into_dto(self) -> EventRevenueDto {
        EventRevenueDto {
            event_id: self.event_id,
            event_name: self.event_name,
            revenue: self.revenue,
        }
    }
}

/// Ticket count of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventAttendance {
    pub event_id: i32,
    pub event_name: String,
    pub attendance: i64,
}

impl EventAttendance {
    pub fn into_dto(self) -> EventAttendanceDto {
        EventAttendanceDto {
            event_id: self.event_id,
            event_name: self.event_name,
            attendance: self.attendance,
        }
    }
}
