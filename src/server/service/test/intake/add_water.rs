use super::*;
use crate::server::{
    data::water_log::WaterLogRepository,
    util::time::{day_window, local_date},
};
use sea_orm::Order;
use tokio::task::JoinSet;

/// Tests adding water to today's counter.
///
/// Expected: log stored and new_total equals previous total plus amount
#[tokio::test]
async fn adds_log_and_increments_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(500)
        .last_reset_date(now - Duration::hours(1))
        .build()
        .await?;
    let user = User::from_entity(entity);

    let change = IntakeService::new(db)
        .add_water(user.clone(), log_param(&user, 250, now))
        .await?;

    assert_eq!(change.new_total, 750);
    assert_eq!(change.log.amount, 250);
    assert_eq!(change.log.user_id, user.id);
    assert_eq!(change.log.created_at, now);

    Ok(())
}

/// Tests adding water on the first request of a new local day.
///
/// Verifies yesterday's total is dropped before the new amount is counted.
///
/// Expected: new_total equals only the new amount
#[tokio::test]
async fn resets_before_adding_on_new_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .current_water_intake(2400)
        .last_reset_date(now - Duration::days(1))
        .build()
        .await?;
    let user = User::from_entity(entity);

    let change = IntakeService::new(db)
        .add_water(user.clone(), log_param(&user, 300, now))
        .await?;

    assert_eq!(change.new_total, 300);

    Ok(())
}

/// Tests concurrent adds for one user.
///
/// Runs on a file-backed database so each request holds its own pooled connection and
/// the transactions overlap.
///
/// Expected: total equals N * amount and N logs exist
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_are_not_lost() -> Result<(), AppError> {
    const REQUESTS: i32 = 20;
    const AMOUNT: i32 = 150;

    let test = TestBuilder::new()
        .on_disk()
        .with_migrations()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let entity = factory::user::UserFactory::new(db)
        .last_reset_date(now - Duration::hours(1))
        .build()
        .await?;
    let user = User::from_entity(entity);

    let mut tasks = JoinSet::new();
    for _ in 0..REQUESTS {
        let db = db.clone();
        let user = user.clone();
        tasks.spawn(async move {
            let param = log_param(&user, AMOUNT, now);
            IntakeService::new(&db).add_water(user, param).await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap()?;
    }

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.current_water_intake, REQUESTS * AMOUNT);

    let today = day_window(local_date(now)).unwrap();
    let logs = WaterLogRepository::new(db)
        .get_by_user_in_window(user.id, today, Order::Asc)
        .await?;
    assert_eq!(logs.len(), REQUESTS as usize);

    Ok(())
}
