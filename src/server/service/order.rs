use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, user::UserRepository},
    error::AppError,
    model::order::{Order, OrderParams},
};

const RESOURCE: &str = "Pedido";

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all orders with their lines
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets an order by ID, erroring when the ID has no row
    pub async fn get_by_id(&self, id: i32) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Gets the orders of one user
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Creates a new order with its lines, resolving the user first
    pub async fn create(&self, params: OrderParams) -> Result<Order, AppError> {
        self.check_references(&params).await?;

        let repo = OrderRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Replaces an order and its lines by path ID, erroring when the ID has
    /// no row
    pub async fn update(&self, id: i32, params: OrderParams) -> Result<Order, AppError> {
        self.check_references(&params).await?;

        let repo = OrderRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Marks an order COMPLETADO.
    ///
    /// The transition is unconditional: completing twice leaves the status
    /// COMPLETADO, and nothing prevents completing a cancelled order. No
    /// inventory or wallet adjustment happens here.
    pub async fn complete(&self, id: i32) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        repo.complete(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Deletes an order and, through the schema cascade, its lines
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = OrderRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn check_references(&self, params: &OrderParams) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(params.user_id).await? {
            return Err(AppError::not_found("Usuario", params.user_id));
        }

        Ok(())
    }
}
