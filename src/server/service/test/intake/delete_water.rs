use super::*;
use crate::server::data::water_log::WaterLogRepository;
use tokio::task::JoinSet;

/// Tests that adding then deleting a log restores the previous total.
///
/// Expected: new_total back to the pre-add value and the log gone
#[tokio::test]
async fn delete_reverts_add() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(400)
        .last_reset_date(now - Duration::hours(2))
        .build()
        .await?;
    let user = User::from_entity(entity);
    let service = IntakeService::new(db);

    let added = service
        .add_water(user.clone(), log_param(&user, 300, now))
        .await?;
    assert_eq!(added.new_total, 700);

    let deleted = service
        .delete_water(user.clone(), added.log.id, now + Duration::minutes(1))
        .await?;

    assert_eq!(deleted.new_total, 400);
    assert_eq!(deleted.log.id, added.log.id);
    assert!(WaterLogRepository::new(db)
        .find_by_id(added.log.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests the floor at zero when the stored total is smaller than the log.
///
/// Expected: new_total 0
#[tokio::test]
async fn delete_floors_total_at_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(100)
        .last_reset_date(now - Duration::hours(2))
        .build()
        .await?;
    let log = factory::water_log::create_water_log_at(db, entity.id, 500, now).await?;

    let deleted = IntakeService::new(db)
        .delete_water(User::from_entity(entity), log.id, now)
        .await?;

    assert_eq!(deleted.new_total, 0);

    Ok(())
}

/// Tests deleting a log from an earlier day.
///
/// Verifies today's counter is left alone because the log was never part of it.
///
/// Expected: log deleted, new_total unchanged
#[tokio::test]
async fn deleting_older_log_keeps_today_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(600)
        .last_reset_date(now - Duration::hours(2))
        .build()
        .await?;
    let old = factory::water_log::create_water_log_at(db, entity.id, 800, now - Duration::days(2))
        .await?;

    let deleted = IntakeService::new(db)
        .delete_water(User::from_entity(entity), old.id, now)
        .await?;

    assert_eq!(deleted.new_total, 600);

    Ok(())
}

/// Tests deleting a log owned by another user.
///
/// Expected: Err(AccessDenied) and the log still present
#[tokio::test]
async fn rejects_foreign_log() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let owner = factory::user::UserFactory::new(db)
        .last_reset_date(now)
        .build()
        .await?;
    let intruder = factory::user::UserFactory::new(db)
        .last_reset_date(now)
        .build()
        .await?;
    let log = factory::water_log::create_water_log_at(db, owner.id, 250, now).await?;

    let result = IntakeService::new(db)
        .delete_water(User::from_entity(intruder), log.id, now)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));
    assert!(WaterLogRepository::new(db).find_by_id(log.id).await?.is_some());

    Ok(())
}

/// Tests deleting a log that does not exist, including a repeated delete.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_log_is_not_found() -> Result<(), AppError> {
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
    let log = factory::water_log::create_water_log_at(db, entity.id, 250, now).await?;
    let user = User::from_entity(entity);
    let service = IntakeService::new(db);

    service.delete_water(user.clone(), log.id, now).await?;
    let result = service.delete_water(user, log.id, now).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests concurrent deletes of distinct logs for one user.
///
/// Runs on a file-backed database so the delete transactions overlap on separate
/// connections.
///
/// Expected: every delete succeeds and only the amount not backed by a log remains
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deletes_are_not_lost() -> Result<(), AppError> {
    const REQUESTS: i32 = 20;
    const AMOUNT: i32 = 100;
    const UNLOGGED: i32 = 50;

    let test = TestBuilder::new()
        .on_disk()
        .with_migrations()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(REQUESTS * AMOUNT + UNLOGGED)
        .last_reset_date(now - Duration::hours(2))
        .build()
        .await?;
    let user = User::from_entity(entity);

    let mut log_ids = Vec::new();
    for minute in 0..REQUESTS {
        let log = factory::water_log::create_water_log_at(
            db,
            user.id,
            AMOUNT,
            now - Duration::minutes(minute as i64),
        )
        .await?;
        log_ids.push(log.id);
    }

    let mut tasks = JoinSet::new();
    for log_id in log_ids {
        let db = db.clone();
        let user = user.clone();
        tasks.spawn(async move { IntakeService::new(&db).delete_water(user, log_id, now).await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap()?;
    }

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.current_water_intake, UNLOGGED);

    Ok(())
}
