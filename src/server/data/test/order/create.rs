use super::*;

/// Tests creating an order together with its lines.
///
/// Expected: Ok with the order PENDIENTE and both lines attached
#[tokio::test]
async fn creates_order_with_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(params(user.id, vec![line(2, 20.0), line(1, 5.0)]))
        .await?;

    assert_eq!(order.status, OrderStatus::Pendiente);
    assert_eq!(order.total, 45.0);
    assert_eq!(order.lines.len(), 2);
    assert!(order.lines.iter().all(|l| l.order_id == order.id));

    let fetched = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(fetched.lines.len(), 2);

    Ok(())
}

/// Tests that a lineless order is allowed.
#[tokio::test]
async fn creates_order_without_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo.create(params(user.id, Vec::new())).await?;

    assert!(order.lines.is_empty());

    Ok(())
}
