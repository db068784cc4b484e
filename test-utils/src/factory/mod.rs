//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign keys explicitly: parents are passed in
//! by ID, and `helpers` offers shortcuts that build whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let city = factory::city::create_city(&db).await?;
//! let club = factory::club::create_club(&db, city.id).await?;
//!
//! // Create with all dependencies
//! let (user, club, event, slot, ticket) =
//!     factory::helpers::create_ticket_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ana@x.com")
//!     .role(entity::UserRole::Admin)
//!     .build()
//!     .await?;
//! ```

pub mod bottle;
pub mod bottle_reservation;
pub mod city;
pub mod club;
pub mod dj;
pub mod event;
pub mod helpers;
pub mod order;
pub mod reward;
pub mod ticket;
pub mod time_slot;
pub mod user;
pub mod vip_zone;

// Re-export commonly used factory functions for concise usage
pub use bottle::create_bottle;
pub use bottle_reservation::create_reservation;
pub use city::create_city;
pub use club::create_club;
pub use dj::create_dj;
pub use event::create_event;
pub use order::{create_order, create_order_line};
pub use reward::create_reward;
pub use ticket::create_ticket;
pub use time_slot::create_time_slot;
pub use user::create_user;
pub use vip_zone::create_vip_zone;
