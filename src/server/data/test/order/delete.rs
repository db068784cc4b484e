use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting an order removes its lines through the schema cascade.
#[tokio::test]
async fn delete_cascades_to_lines() -> Result<(), DbErr> {
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

    assert!(repo.delete(order.id).await?);

    let remaining_lines = entity::prelude::OrderLine::find().count(db).await?;
    assert_eq!(remaining_lines, 0);

    Ok(())
}

/// Tests that a second delete on the removed ID reports missing.
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ticketing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.id).await?;

    let repo = OrderRepository::new(db);

    assert!(repo.delete(order.id).await?);
    assert!(!repo.delete(order.id).await?);

    Ok(())
}
