use super::*;

/// Tests that users come back ordered by stored running total, highest first.
///
/// Expected: Ok with users sorted by intake descending
#[tokio::test]
async fn orders_by_intake_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let low = factory::user::UserFactory::new(db)
        .current_water_intake(250)
        .build()
        .await?;
    let high = factory::user::UserFactory::new(db)
        .current_water_intake(1750)
        .build()
        .await?;
    let middle = factory::user::UserFactory::new(db)
        .current_water_intake(900)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all_by_intake().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![high.id, middle.id, low.id]);

    Ok(())
}

/// Tests an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_all_by_intake().await?.is_empty());

    Ok(())
}
