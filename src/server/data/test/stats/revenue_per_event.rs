use super::*;

/// Tests that revenue sums ticket prices per event and that an event without
/// tickets reports zero.
#[tokio::test]
async fn sums_ticket_prices_per_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db).await?;
    let club = factory::create_club(db, city.id).await?;
    let dj = factory::create_dj(db).await?;
    let slot = factory::create_time_slot(db, club.id).await?;

    let with_tickets = factory::create_event(db, club.id, dj.id, user.id).await?;
    let without_tickets = factory::create_event(db, club.id, dj.id, user.id).await?;

    factory::ticket::TicketFactory::new(db, user.id, with_tickets.id, slot.id)
        .price(20.0)
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, user.id, with_tickets.id, slot.id)
        .price(35.5)
        .build()
        .await?;

    let repo = StatsRepository::new(db);
    let revenue = repo.revenue_per_event(club.id).await?;

    assert_eq!(revenue.len(), 2);

    let sold = revenue.iter().find(|r| r.event_id == with_tickets.id).unwrap();
    assert_eq!(sold.revenue, 55.5);

    let unsold = revenue
        .iter()
        .find(|r| r.event_id == without_tickets.id)
        .unwrap();
    assert_eq!(unsold.revenue, 0.0);

    Ok(())
}

/// Tests that a club without events reports an empty result.
#[tokio::test]
async fn club_without_events_reports_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let club = factory::create_club(db, city.id).await?;

    let repo = StatsRepository::new(db);

    assert!(repo.revenue_per_event(club.id).await?.is_empty());

    Ok(())
}
