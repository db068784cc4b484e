use super::*;

/// Tests that update replaces name and email and keeps the stored hash when
/// no new password arrives.
#[tokio::test]
async fn keeps_hash_without_new_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(create_params("ana@x.com")).await?;

    let updated = repo
        .update(created.id, "Ana María".to_string(), "ana.maria@x.com".to_string(), None)
        .await?
        .unwrap();

    assert_eq!(updated.name, "Ana María");
    assert_eq!(updated.email, "ana.maria@x.com");
    assert_eq!(updated.password_hash, created.password_hash);
    assert_eq!(updated.role, created.role);

    Ok(())
}

/// Tests that a supplied hash replaces the stored one.
#[tokio::test]
async fn replaces_hash_when_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(create_params("ana@x.com")).await?;

    let updated = repo
        .update(
            created.id,
            created.name.clone(),
            created.email.clone(),
            Some("11$11".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.password_hash, "11$11");

    Ok(())
}

/// Tests that updating a missing ID yields None.
#[tokio::test]
async fn missing_id_yields_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let result = repo
        .update(42, "Ana".to_string(), "ana@x.com".to_string(), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
