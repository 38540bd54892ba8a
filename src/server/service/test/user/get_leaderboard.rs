use super::*;

/// Tests leaderboard ordering with a stale counter.
///
/// Verifies a user whose highest stored total is from yesterday is ranked
/// with 0, and that nothing is written back for them.
///
/// Expected: today's totals first, stale user last, stored total untouched
#[tokio::test]
async fn ranks_by_effective_intake() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixed_now();

    let stale = factory::user::UserFactory::new(db)
        .current_water_intake(5000)
        .last_reset_date(now - Duration::days(1))
        .build()
        .await?;
    let light = factory::user::UserFactory::new(db)
        .current_water_intake(300)
        .last_reset_date(now)
        .build()
        .await?;
    let heavy = factory::user::UserFactory::new(db)
        .current_water_intake(1800)
        .last_reset_date(now)
        .build()
        .await?;

    let users = UserService::new(db).get_leaderboard(now).await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![heavy.id, light.id, stale.id]);

    let rows: Vec<i32> = users
        .into_iter()
        .map(|u| u.into_leaderboard_dto(now).current_water_intake)
        .collect();
    assert_eq!(rows, vec![1800, 300, 0]);

    let stored = crate::server::data::user::UserRepository::new(db)
        .find_by_id(stale.id)
        .await?
        .unwrap();
    assert_eq!(stored.current_water_intake, 5000);

    Ok(())
}
