use super::*;

/// Tests subtracting less than the stored total.
///
/// Expected: intake reduced by the amount
#[tokio::test]
async fn subtracts_from_running_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .current_water_intake(750)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.decrement_intake(created.id, 250, Utc::now()).await?);

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.current_water_intake, 500);

    Ok(())
}

/// Tests subtracting more than the stored total.
///
/// Verifies the total is floored at zero instead of going negative.
///
/// Expected: intake 0
#[tokio::test]
async fn floors_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .current_water_intake(200)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.decrement_intake(created.id, 500, Utc::now()).await?;

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.current_water_intake, 0);

    Ok(())
}

/// Tests subtracting exactly the stored total.
///
/// Expected: intake 0
#[tokio::test]
async fn exact_amount_reaches_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .current_water_intake(300)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.decrement_intake(created.id, 300, Utc::now()).await?;

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.current_water_intake, 0);

    Ok(())
}
