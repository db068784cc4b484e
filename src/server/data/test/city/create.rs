use super::*;

/// Tests that a created city reads back field-for-field by its returned ID.
///
/// Expected: Ok with an equal representation modulo the server-assigned ID
#[tokio::test]
async fn created_city_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let created = repo.create(params("Madrid")).await?;

    let fetched = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Madrid");
    assert_eq!(fetched.postal_code, "28001");

    Ok(())
}

/// Tests that a missing ID reads back as None.
#[tokio::test]
async fn missing_id_reads_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
