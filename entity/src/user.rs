use sea_orm::entity::prelude::*;

/// Closed set of platform roles. Stored as the legacy uppercase strings so
/// existing databases and API clients keep working.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum UserRole {
    #[sea_orm(string_value = "CLIENTE")]
    #[default]
    Cliente,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "ADMIN_DISCOTECA")]
    AdminDiscoteca,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Cliente => "CLIENTE",
            UserRole::Admin => "ADMIN",
            UserRole::AdminDiscoteca => "ADMIN_DISCOTECA",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub wallet_balance: f64,
    pub reward_points: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::reward_redemption::Entity")]
    RewardRedemption,
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

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::reward_redemption::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RewardRedemption.def()
    }
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_club::Relation::Club.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_club::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
