use super::*;

/// Tests setting a new daily goal.
///
/// Expected: returned user carries the new goal
#[tokio::test]
async fn updates_goal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::create_user(db).await?;

    let user = UserService::new(db)
        .update_goal(&User::from_entity(entity), 2750, fixed_now())
        .await?;

    assert_eq!(user.daily_water_goal, 2750);
    assert_eq!(user.updated_at, fixed_now());

    Ok(())
}
