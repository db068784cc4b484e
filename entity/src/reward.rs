use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reward")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub points_required: i32,
    pub description: Option<String>,
    pub valid_from: DateTimeUtc,
    pub valid_until: DateTimeUtc,
    pub bottle_id: i32,
    pub reservation_id: i32,
    pub ticket_id: i32,
    pub event_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bottle::Entity",
        from = "Column::BottleId",
        to = "super::bottle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bottle,
    #[sea_orm(
        belongs_to = "super::bottle_reservation::Entity",
        from = "Column::ReservationId",
        to = "super::bottle_reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BottleReservation,
    #[sea_orm(
        belongs_to = "super::ticket::Entity",
        from = "Column::TicketId",
        to = "super::ticket::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Ticket,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(has_many = "super::reward_redemption::Entity")]
    RewardRedemption,
}

impl Related<super::bottle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bottle.def()
    }
}

impl Related<super::bottle_reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BottleReservation.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::reward_redemption::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RewardRedemption.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::reward_redemption::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reward_redemption::Relation::Reward.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
