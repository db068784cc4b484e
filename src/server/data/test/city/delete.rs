use super::*;

/// Tests that delete reports the row's existence: true once, false for the
/// repeated call on the already-removed ID.
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let created = repo.create(params("Madrid")).await?;

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
