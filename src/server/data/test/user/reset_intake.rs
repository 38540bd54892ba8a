use super::*;

/// Tests resetting a counter last reset on an earlier local day.
///
/// Expected: Ok(true), intake 0 and last_reset_date moved to now
#[tokio::test]
async fn resets_stale_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();

    let created = factory::user::UserFactory::new(db)
        .current_water_intake(1500)
        .last_reset_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let today = day_window(local_date(now)).unwrap();
    assert!(repo.reset_intake(created.id, today, now).await?);

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.current_water_intake, 0);
    assert_eq!(user.last_reset_date, now);

    Ok(())
}

/// Tests that a second reset on the same local day is a no-op.
///
/// Verifies the compare-and-set condition: once the first reset moved
/// last_reset_date into today's window, further calls match no row.
///
/// Expected: first call Ok(true), second call Ok(false), intake added in between kept
#[tokio::test]
async fn resets_only_once_per_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();

    let created = factory::user::UserFactory::new(db)
        .current_water_intake(1500)
        .last_reset_date(now - Duration::days(2))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let today = day_window(local_date(now)).unwrap();

    assert!(repo.reset_intake(created.id, today, now).await?);
    repo.increment_intake(created.id, 250, now).await?;
    assert!(
        !repo
            .reset_intake(created.id, today, now + Duration::hours(1))
            .await?
    );

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.current_water_intake, 250);
    assert_eq!(user.last_reset_date, now);

    Ok(())
}

/// Tests that a counter already reset earlier the same local day is left alone.
///
/// 2025-06-14 21:30 UTC is 00:30 local on 2025-06-15.
///
/// Expected: Ok(false) and intake unchanged
#[tokio::test]
async fn keeps_counter_reset_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();

    let created = factory::user::UserFactory::new(db)
        .current_water_intake(600)
        .last_reset_date(Utc.with_ymd_and_hms(2025, 6, 14, 21, 30, 0).unwrap())
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let today = day_window(local_date(now)).unwrap();

    assert!(!repo.reset_intake(created.id, today, now).await?);

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.current_water_intake, 600);

    Ok(())
}
