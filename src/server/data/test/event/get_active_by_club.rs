use super::*;

/// Tests that the active-events filter returns exactly the ACTIVO events of
/// the club: three active out of five total.
#[tokio::test]
async fn returns_only_active_events_of_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db).await?;
    let club = factory::create_club(db, city.id).await?;
    let dj = factory::create_dj(db).await?;

    let statuses = [
        EventStatus::Activo,
        EventStatus::Activo,
        EventStatus::Activo,
        EventStatus::Cancelado,
        EventStatus::Finalizado,
    ];
    for status in statuses {
        factory::event::EventFactory::new(db, club.id, dj.id, user.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = EventRepository::new(db);
    let active = repo.get_active_by_club(club.id).await?;

    assert_eq!(active.len(), 3);
    assert!(active.iter().all(|e| e.status == EventStatus::Activo));
    assert!(active.iter().all(|e| e.club_id == club.id));

    Ok(())
}

/// Tests that another club's active events stay out of the result.
#[tokio::test]
async fn ignores_other_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db).await?;
    let club = factory::create_club(db, city.id).await?;
    let other_club = factory::create_club(db, city.id).await?;
    let dj = factory::create_dj(db).await?;

    factory::create_event(db, other_club.id, dj.id, user.id).await?;

    let repo = EventRepository::new(db);

    assert!(repo.get_active_by_club(club.id).await?.is_empty());
    assert_eq!(repo.get_active_by_club(other_club.id).await?.len(), 1);

    Ok(())
}
