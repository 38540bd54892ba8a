use super::*;

/// Tests updating the daily goal.
///
/// Expected: Ok(true) and the stored goal and updated_at change
#[tokio::test]
async fn updates_goal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;
    let later = created.created_at + Duration::minutes(5);

    let repo = UserRepository::new(db);
    assert!(repo.update_goal(created.id, 3000, later).await?);

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.daily_water_goal, 3000);
    assert_eq!(user.updated_at, later);

    Ok(())
}

/// Tests updating the goal of a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.update_goal(99, 3000, Utc::now()).await?);

    Ok(())
}
