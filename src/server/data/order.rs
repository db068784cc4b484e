use chrono::Utc;
use entity::OrderStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::order::{Order, OrderParams};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all orders with their lines, most recent first
    pub async fn get_all(&self) -> Result<Vec<Order>, DbErr> {
        let rows = entity::prelude::Order::find()
            .find_with_related(entity::prelude::OrderLine)
            .order_by_desc(entity::order::Column::OrderedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(order, lines)| Order::from_entities(order, lines))
            .collect())
    }

    /// Finds an order by ID with its lines
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let rows = entity::prelude::Order::find_by_id(id)
            .find_with_related(entity::prelude::OrderLine)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(order, lines)| Order::from_entities(order, lines)))
    }

    /// Gets the orders of one user with their lines, most recent first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let rows = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .find_with_related(entity::prelude::OrderLine)
            .order_by_desc(entity::order::Column::OrderedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(order, lines)| Order::from_entities(order, lines))
            .collect())
    }

    /// Creates a new order and its lines, stamped with the current time
    pub async fn create(&self, params: OrderParams) -> Result<Order, DbErr> {
        let order = entity::order::ActiveModel {
            status: ActiveValue::Set(params.status),
            total: ActiveValue::Set(params.total),
            ordered_at: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut lines = Vec::with_capacity(params.lines.len());
        for line in params.lines {
            let line = entity::order_line::ActiveModel {
                quantity: ActiveValue::Set(line.quantity),
                price: ActiveValue::Set(line.price),
                contents: ActiveValue::Set(line.contents),
                order_id: ActiveValue::Set(order.id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            lines.push(line);
        }

        Ok(Order::from_entities(order, lines))
    }

    /// Replaces an order's fields and lines; the order timestamp stays.
    /// Existing lines are dropped and the given ones inserted in their place.
    /// Returns None if the ID has no row.
    pub async fn update(&self, id: i32, params: OrderParams) -> Result<Option<Order>, DbErr> {
        let Some(existing) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = existing.into();
        active.status = ActiveValue::Set(params.status);
        active.total = ActiveValue::Set(params.total);
        active.user_id = ActiveValue::Set(params.user_id);

        let order = active.update(self.db).await?;

        entity::prelude::OrderLine::delete_many()
            .filter(entity::order_line::Column::OrderId.eq(id))
            .exec(self.db)
            .await?;

        let mut lines = Vec::with_capacity(params.lines.len());
        for line in params.lines {
            let line = entity::order_line::ActiveModel {
                quantity: ActiveValue::Set(line.quantity),
                price: ActiveValue::Set(line.price),
                contents: ActiveValue::Set(line.contents),
                order_id: ActiveValue::Set(id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            lines.push(line);
        }

        Ok(Some(Order::from_entities(order, lines)))
    }

    /// Marks an order COMPLETADO. The transition is unconditional: a second
    /// call leaves the status COMPLETADO, and a cancelled order is not
    /// guarded against. Returns None if the ID has no row.
    pub async fn complete(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(existing) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = existing.into();
        active.status = ActiveValue::Set(OrderStatus::Completado);
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Deletes an order; its lines go with it through the schema cascade.
    /// Returns false if the ID had no row.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an order exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Order::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
