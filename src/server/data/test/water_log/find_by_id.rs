use super::*;

/// Tests finding a log by ID, including logs of other users.
///
/// Expected: Ok(Some) carrying the owner's user_id
#[tokio::test]
async fn finds_log_of_any_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::user::create_user(db).await?;
    let created = factory::water_log::create_water_log(db, owner.id, 500).await?;

    let repo = WaterLogRepository::new(db);
    let log = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(log.user_id, owner.id);
    assert_eq!(log.amount, 500);

    Ok(())
}

/// Tests looking up an unknown log ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WaterLogRepository::new(db);

    assert!(repo.find_by_id(12345).await?.is_none());

    Ok(())
}
