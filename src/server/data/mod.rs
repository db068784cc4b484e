//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD and query-by-field) for each domain in the application. Repositories
//! use SeaORM entity models internally and return domain models at the
//! boundary; the user repository is the exception and hands back entity
//! models, since authentication needs the stored password hash.

pub mod bottle;
pub mod city;
pub mod club;
pub mod dj;
pub mod event;
pub mod order;
pub mod reservation;
pub mod reward;
pub mod stats;
pub mod ticket;
pub mod time_slot;
pub mod user;
pub mod vip_zone;

#[cfg(test)]
mod test;
