use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{City, Club};
///
/// let test = TestBuilder::new()
///     .with_table(City)
///     .with_table(Club)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in the order
    /// they were added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency order
    /// (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the catalog tables: users, cities, clubs, DJs, the user↔club link,
    /// time slots and events, in dependency order.
    ///
    /// Use this when testing catalog functionality that doesn't involve
    /// tickets or orders. For ticket-related tests use `with_ticketing_tables()`.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(City)
            .with_table(Club)
            .with_table(Dj)
            .with_table(UserClub)
            .with_table(TimeSlot)
            .with_table(Event)
    }

    /// Adds the catalog tables plus tickets, orders and order lines.
    pub fn with_ticketing_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Ticket)
            .with_table(Order)
            .with_table(OrderLine)
    }

    /// Adds every table of the schema: ticketing plus VIP zones, bottles,
    /// bottle reservations, reservation details, rewards and redemptions.
    pub fn with_all_tables(self) -> Self {
        self.with_ticketing_tables()
            .with_table(VipZone)
            .with_table(Bottle)
            .with_table(BottleReservation)
            .with_table(ReservationDetail)
            .with_table(Reward)
            .with_table(RewardRedemption)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE
    /// TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
