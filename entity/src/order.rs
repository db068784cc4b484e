use sea_orm::entity::prelude::*;

/// Lifecycle of a checkout order. Stored as the legacy uppercase strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum OrderStatus {
    #[sea_orm(string_value = "PENDIENTE")]
    #[default]
    Pendiente,
    #[sea_orm(string_value = "EN_PROCESO")]
    EnProceso,
    #[sea_orm(string_value = "COMPLETADO")]
    Completado,
    #[sea_orm(string_value = "CANCELADO")]
    Cancelado,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "PENDIENTE",
            OrderStatus::EnProceso => "EN_PROCESO",
            OrderStatus::Completado => "COMPLETADO",
            OrderStatus::Cancelado => "CANCELADO",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub status: OrderStatus,
    pub total: f64,
    pub ordered_at: DateTimeUtc,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLine,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
