use sea_orm::entity::prelude::*;

/// Lifecycle of a published event. Stored as the legacy uppercase strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum EventStatus {
    #[sea_orm(string_value = "ACTIVO")]
    #[default]
    Activo,
    #[sea_orm(string_value = "CANCELADO")]
    Cancelado,
    #[sea_orm(string_value = "FINALIZADO")]
    Finalizado,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Activo => "ACTIVO",
            EventStatus::Cancelado => "CANCELADO",
            EventStatus::Finalizado => "FINALIZADO",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub starts_at: DateTimeUtc,
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::ClubId",
        to = "super::club::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Club,
    #[sea_orm(
        belongs_to = "super::dj::Entity",
        from = "Column::DjId",
        to = "super::dj::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Dj,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
    #[sea_orm(has_many = "super::reward::Entity")]
    Reward,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::dj::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dj.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::reward::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reward.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
