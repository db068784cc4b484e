//! Shared helper utilities for factory methods.
//!
//! Provides the unique-ID counter used by every factory plus convenience
//! methods that create an entity together with its whole dependency chain.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event with all its dependencies.
///
/// Creates, in order: a user (event creator), a city, a club in that city and
/// a DJ, then the event itself. All entities use default values; use the
/// individual factories to customize specific entities.
///
/// # Returns
/// - `Ok((user, city, club, dj, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::city::Model,
        entity::club::Model,
        entity::dj::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let city = crate::factory::city::create_city(db).await?;
    let club = crate::factory::club::create_club(db, city.id).await?;
    let dj = crate::factory::dj::create_dj(db).await?;
    let event = crate::factory::event::create_event(db, club.id, dj.id, user.id).await?;

    Ok((user, city, club, dj, event))
}

/// Creates a ticket with all its dependencies.
///
/// Builds the full chain: user, city, club, DJ, time slot and event, then a
/// ticket owned by the user for that event and slot. The city and DJ are
/// created but not returned.
///
/// # Returns
/// - `Ok((user, club, event, time_slot, ticket))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ticket_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::club::Model,
        entity::event::Model,
        entity::time_slot::Model,
        entity::ticket::Model,
    ),
    DbErr,
> {
    let (user, _city, club, _dj, event) = create_event_with_dependencies(db).await?;
    let slot = crate::factory::time_slot::create_time_slot(db, club.id).await?;
    let ticket = crate::factory::ticket::create_ticket(db, user.id, event.id, slot.id).await?;

    Ok((user, club, event, slot, ticket))
}

/// Creates a bottle reservation with all its dependencies.
///
/// Extends the ticket chain with a VIP zone and a reservation attached to the
/// ticket.
///
/// # Returns
/// - `Ok((user, club, ticket, vip_zone, reservation))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::club::Model,
        entity::ticket::Model,
        entity::vip_zone::Model,
        entity::bottle_reservation::Model,
    ),
    DbErr,
> {
    let (user, club, _event, _slot, ticket) = create_ticket_with_dependencies(db).await?;
    let zone = crate::factory::vip_zone::create_vip_zone(db, club.id).await?;
    let reservation = crate::factory::bottle_reservation::create_reservation(db, ticket.id, zone.id).await?;

    Ok((user, club, ticket, zone, reservation))
}

/// Creates a reward with its full dependency chain.
///
/// A reward references a bottle, a reservation, a ticket and an event, so
/// this builds everything from the user down. Only the user and the reward
/// are returned; the intermediate entities are created with defaults.
///
/// # Returns
/// - `Ok((user, reward))` - The reward and the user who owns the underlying ticket
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reward_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::reward::Model), DbErr> {
    let (user, club, ticket, _zone, reservation) = create_reservation_with_dependencies(db).await?;
    let bottle = crate::factory::bottle::create_bottle(db, club.id).await?;
    let reward = crate::factory::reward::create_reward(
        db,
        bottle.id,
        reservation.id,
        ticket.id,
        ticket.event_id,
    )
    .await?;

    Ok((user, reward))
}
