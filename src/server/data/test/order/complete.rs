use super::*;

/// Tests the COMPLETADO transition on a pending order.
///
/// Expected: Ok with status COMPLETADO and the order timestamp untouched
#[tokio::test]
async fn completes_pending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.id).await?;

    let repo = OrderRepository::new(db);
    let completed = repo.complete(order.id).await?.unwrap();

    assert_eq!(completed.status, OrderStatus::Completado);
    assert_eq!(completed.ordered_at, order.ordered_at);

    Ok(())
}

/// Tests that completing twice succeeds and leaves the status COMPLETADO.
#[tokio::test]
async fn completing_twice_stays_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.id).await?;

    let repo = OrderRepository::new(db);
    repo.complete(order.id).await?.unwrap();
    let second = repo.complete(order.id).await?.unwrap();

    assert_eq!(second.status, OrderStatus::Completado);

    Ok(())
}

/// Tests that a cancelled order can still be completed; the transition has
/// no guard.
#[tokio::test]
async fn completes_cancelled_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id)
        .status(OrderStatus::Cancelado)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let completed = repo.complete(order.id).await?.unwrap();

    assert_eq!(completed.status, OrderStatus::Completado);

    Ok(())
}

/// Tests that completing a missing ID yields None.
#[tokio::test]
async fn missing_id_yields_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);

    assert!(repo.complete(42).await?.is_none());

    Ok(())
}
