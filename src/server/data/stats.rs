//! Aggregate statistics queries.
//!
//! Both statistics group over the events of one club with a LEFT JOIN onto
//! tickets, so events without any ticket still appear in the result with a
//! zero aggregate.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::model::stats::{EventAttendance, EventRevenue};

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums ticket revenue per event of one club.
    pub async fn revenue_per_event(&self, club_id: i32) -> Result<Vec<EventRevenue>, DbErr> {
        let rows: Vec<(i32, String, Option<f64>)> = entity::prelude::Event::find()
            .select_only()
            .column(entity::event::Column::Id)
            .column(entity::event::Column::Name)
            .column_as(entity::ticket::Column::Price.sum(), "revenue")
            .join(JoinType::LeftJoin, entity::event::Relation::Ticket.def())
            .filter(entity::event::Column::ClubId.eq(club_id))
            .group_by(entity::event::Column::Id)
            .group_by(entity::event::Column::Name)
            .order_by_asc(entity::event::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(event_id, event_name, revenue)| EventRevenue {
                event_id,
                event_name,
                revenue: revenue.unwrap_or(0.0),
            })
            .collect())
    }

    /// Counts tickets per event of one club.
    pub async fn attendance_per_event(&self, club_id: i32) -> Result<Vec<EventAttendance>, DbErr> {
        let rows: Vec<(i32, String, i64)> = entity::prelude::Event::find()
            .select_only()
            .column(entity::event::Column::Id)
            .column(entity::event::Column::Name)
            .column_as(entity::ticket::Column::Id.count(), "attendance")
            .join(JoinType::LeftJoin, entity::event::Relation::Ticket.def())
            .filter(entity::event::Column::ClubId.eq(club_id))
            .group_by(entity::event::Column::Id)
            .group_by(entity::event::Column::Name)
            .order_by_asc(entity::event::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(event_id, event_name, attendance)| EventAttendance {
                event_id,
                event_name,
                attendance,
            })
            .collect())
    }
}
