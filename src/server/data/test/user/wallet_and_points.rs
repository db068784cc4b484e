use super::*;

/// Tests that wallet top-ups accumulate.
#[tokio::test]
async fn wallet_balance_accumulates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("ana@x.com")).await?;

    repo.add_wallet_balance(user.id, 25.0).await?.unwrap();
    let updated = repo.add_wallet_balance(user.id, 10.5).await?.unwrap();

    assert_eq!(updated.wallet_balance, 35.5);

    Ok(())
}

/// Tests that spending points subtracts exactly the given amount.
#[tokio::test]
async fn spending_points_subtracts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .reward_points(500)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.spend_reward_points(user.id, 150).await?.unwrap();

    assert_eq!(updated.reward_points, 350);

    Ok(())
}
