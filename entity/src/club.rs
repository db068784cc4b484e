use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub capacity: i32,
    /// Base64-encoded image blob, kept as text like the rest of the platform.
    pub image: Option<String>,
    pub city_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    City,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
    #[sea_orm(has_many = "super::time_slot::Entity")]
    TimeSlot,
    #[sea_orm(has_many = "super::bottle::Entity")]
    Bottle,
    #[sea_orm(has_many = "super::vip_zone::Entity")]
    VipZone,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::time_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSlot.def()
    }
}

impl Related<super::bottle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bottle.def()
    }
}

impl Related<super::vip_zone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VipZone.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_club::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_club::Relation::Club.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
