use super::*;

/// Tests creating a new user.
///
/// Verifies that a registered user starts with a zero running total and that the
/// creation instant seeds `last_reset_date`.
///
/// Expected: Ok with intake 0 and last_reset_date equal to now
#[tokio::test]
async fn creates_user_with_empty_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Deniz".to_string(),
            email: "deniz@example.com".to_string(),
            password_hash: "hash".to_string(),
            daily_water_goal: DEFAULT_DAILY_WATER_GOAL,
            now,
        })
        .await?;

    assert_eq!(user.name, "Deniz");
    assert_eq!(user.email, "deniz@example.com");
    assert_eq!(user.daily_water_goal, 2000);
    assert_eq!(user.current_water_intake, 0);
    assert_eq!(user.last_reset_date, now);
    assert_eq!(user.created_at, now);

    Ok(())
}

/// Tests that the unique index on email rejects a second account.
///
/// Expected: Err from the database
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            daily_water_goal: DEFAULT_DAILY_WATER_GOAL,
            now: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
