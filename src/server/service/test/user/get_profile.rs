use super::*;
use crate::server::data::user::UserRepository;

/// Tests that reading the profile on a new day shows a reset counter.
///
/// Expected: intake 0 and last_reset_date moved to now
#[tokio::test]
async fn profile_applies_reset() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(1250)
        .last_reset_date(now - Duration::days(3))
        .build()
        .await?;

    let user = UserService::new(db)
        .get_profile(User::from_entity(entity), now)
        .await?;

    assert_eq!(user.current_water_intake, 0);
    assert_eq!(user.last_reset_date, now);

    Ok(())
}

/// Tests reading the profile on the same day.
///
/// Expected: intake unchanged
#[tokio::test]
async fn profile_keeps_today_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(1250)
        .last_reset_date(now - Duration::hours(4))
        .build()
        .await?;

    let user = UserService::new(db)
        .get_profile(User::from_entity(entity), now)
        .await?;

    assert_eq!(user.current_water_intake, 1250);

    Ok(())
}

/// Tests reading the profile with a user value loaded before later intake writes.
///
/// Expected: the stored total, not the one carried by the passed value
#[tokio::test]
async fn profile_reads_stored_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(0)
        .last_reset_date(now - Duration::hours(1))
        .build()
        .await?;
    let loaded = User::from_entity(entity);

    UserRepository::new(db)
        .increment_intake(loaded.id, 400, now)
        .await?;

    let user = UserService::new(db).get_profile(loaded, now).await?;

    assert_eq!(user.current_water_intake, 400);

    Ok(())
}
