use super::*;
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

/// Tests that deleting a user removes their club links through the schema
/// cascade.
#[tokio::test]
async fn delete_cascades_to_club_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db).await?;
    let club = factory::create_club(db, city.id).await?;

    entity::prelude::UserClub::insert(entity::user_club::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        club_id: ActiveValue::Set(club.id),
    })
    .exec(db)
    .await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);

    let remaining_links = entity::prelude::UserClub::find().count(db).await?;
    assert_eq!(remaining_links, 0);

    // The club itself stays
    assert_eq!(entity::prelude::Club::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a second delete on the removed ID reports missing.
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);

    Ok(())
}
