use super::*;

/// Tests creating a user and finding it back by email.
///
/// Expected: Ok with CLIENTE role and zero wallet/points
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(create_params("ana@x.com")).await?;

    assert_eq!(created.role, UserRole::Cliente);
    assert_eq!(created.wallet_balance, 0.0);
    assert_eq!(created.reward_points, 0);

    let fetched = repo.find_by_email("ana@x.com").await?.unwrap();
    assert_eq!(fetched.id, created.id);

    assert!(repo.email_exists("ana@x.com").await?);
    assert!(!repo.email_exists("eva@x.com").await?);

    Ok(())
}

/// Tests that the unique email constraint rejects a second row.
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("ana@x.com")).await?;

    let result = repo.create(create_params("ana@x.com")).await;

    assert!(result.is_err());

    Ok(())
}
