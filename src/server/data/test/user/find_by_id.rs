use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .current_water_intake(400)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.email, created.email);
    assert_eq!(user.current_water_intake, 400);

    Ok(())
}

/// Tests looking up an unknown ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(4242).await?.is_none());

    Ok(())
}
