use super::*;

/// Tests that update replaces every field under the path ID.
///
/// Expected: Ok with every field replaced and the ID unchanged
#[tokio::test]
async fn replaces_every_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let created = repo.create(params("Madrid")).await?;

    let updated = repo
        .update(created.id, params("Barcelona"))
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Barcelona");

    Ok(())
}

/// Tests that updating a missing ID yields None rather than inserting.
#[tokio::test]
async fn missing_id_yields_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);

    assert!(repo.update(42, params("Madrid")).await?.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
