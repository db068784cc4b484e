use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub bottle_id: i32,
    pub reservation_id: i32,
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

impl ActiveModelBehavior for ActiveModel {}
