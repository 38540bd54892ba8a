use super::*;

/// Tests deleting a log.
///
/// Verifies a deleted log can no longer be found and a second delete reports nothing removed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_log_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await?;
    let log = factory::water_log::create_water_log(db, user.id, 250).await?;

    let repo = WaterLogRepository::new(db);

    assert!(repo.delete(log.id).await?);
    assert!(repo.find_by_id(log.id).await?.is_none());
    assert!(!repo.delete(log.id).await?);

    Ok(())
}
