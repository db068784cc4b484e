use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bottle_reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guest_count: i32,
    pub total: f64,
    pub reservation_type: String,
    pub ticket_id: i32,
    pub vip_zone_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ticket::Entity",
        from = "Column::TicketId",
        to = "super::ticket::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Ticket,
    #[sea_orm(
        belongs_to = "super::vip_zone::Entity",
        from = "Column::VipZoneId",
        to = "super::vip_zone::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    VipZone,
    #[sea_orm(has_many = "super::reservation_detail::Entity")]
    ReservationDetail,
    #[sea_orm(has_many = "super::reward::Entity")]
    Reward,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::vip_zone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VipZone.def()
    }
}

impl Related<super::reservation_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationDetail.def()
    }
}

impl Related<super::reward::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reward.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
