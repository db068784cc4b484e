use super::*;

/// Tests that attendance counts tickets per event, zero included.
#[tokio::test]
async fn counts_tickets_per_event() -> Result<(), DbErr> {
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

    let busy = factory::create_event(db, club.id, dj.id, user.id).await?;
    let empty = factory::create_event(db, club.id, dj.id, user.id).await?;

    for _ in 0..3 {
        factory::create_ticket(db, user.id, busy.id, slot.id).await?;
    }

    let repo = StatsRepository::new(db);
    let attendance = repo.attendance_per_event(club.id).await?;

    assert_eq!(attendance.len(), 2);
    assert_eq!(
        attendance.iter().find(|a| a.event_id == busy.id).unwrap().attendance,
        3
    );
    assert_eq!(
        attendance.iter().find(|a| a.event_id == empty.id).unwrap().attendance,
        0
    );

    Ok(())
}
