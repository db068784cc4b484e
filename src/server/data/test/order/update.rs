use super::*;

/// Tests that update replaces the order's lines wholesale.
///
/// Expected: Ok with the old lines gone and the new single line in place
#[tokio::test]
async fn replaces_lines() -> Result<(), DbErr> {
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

    let updated = repo
        .update(order.id, params(user.id, vec![line(3, 10.0)]))
        .await?
        .unwrap();

    assert_eq!(updated.lines.len(), 1);
    assert_eq!(updated.lines[0].quantity, 3);

    let fetched = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(fetched.lines.len(), 1);

    Ok(())
}
