use super::*;

/// Tests that history lists only today's logs, newest first.
///
/// Expected: today's two logs in descending order, yesterday's log excluded
#[tokio::test]
async fn lists_today_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .last_reset_date(now)
        .build()
        .await?;
    let early = factory::water_log::create_water_log_at(
        db,
        entity.id,
        200,
        Utc.with_ymd_and_hms(2025, 6, 14, 21, 30, 0).unwrap(),
    )
    .await?;
    let late =
        factory::water_log::create_water_log_at(db, entity.id, 300, now - Duration::minutes(5))
            .await?;
    factory::water_log::create_water_log_at(db, entity.id, 900, now - Duration::days(1)).await?;

    let logs = IntakeService::new(db)
        .history(&User::from_entity(entity), now)
        .await?;

    let ids: Vec<i32> = logs.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    Ok(())
}
