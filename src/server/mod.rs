//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints,
//! business logic, data access and infrastructure. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and error-body response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token service)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration, OpenAPI document and CORS
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to the controller
//! 2. **Controller** runs the route's guard checkpoint, converts DTOs to
//!    params, calls the service
//! 3. **Service** executes business logic and orchestrates data operations
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and answers
//!
//! Failed requests answer through the error layer; the `error_body`
//! middleware renders every error response into one structured JSON shape.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
