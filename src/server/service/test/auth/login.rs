use super::*;
use crate::server::service::auth::password::hash_password;

/// Tests logging in with correct credentials.
///
/// Expected: Ok with the matching user and a valid token
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let service = AuthService::new(db, &tokens);

    let registered = service
        .register(register_param("login@example.com"), Utc::now())
        .await?;

    let logged_in = service
        .login("login@example.com", "secret123", Utc::now())
        .await?;

    assert_eq!(logged_in.user.id, registered.user.id);
    assert_eq!(tokens.verify(&logged_in.token)?.sub, registered.user.id);

    Ok(())
}

/// Tests wrong password and unknown email.
///
/// Verifies both failures are reported identically.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .email("known@example.com")
        .password_hash(hash_password("secret123")?)
        .build()
        .await?;

    let service = AuthService::new(db, &tokens);

    let wrong_password = service
        .login("known@example.com", "not-it", fixed_now())
        .await;
    let unknown_email = service
        .login("unknown@example.com", "secret123", fixed_now())
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that login applies the daily reset.
///
/// Expected: stale intake reported as 0 after login
#[tokio::test]
async fn login_resets_stale_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_intake_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let now = fixed_now();

    factory::user::UserFactory::new(db)
        .email("stale@example.com")
        .password_hash(hash_password("secret123")?)
        .current_water_intake(1900)
        .last_reset_date(now - Duration::days(1))
        .build()
        .await?;

    let logged_in = AuthService::new(db, &tokens)
        .login("stale@example.com", "secret123", now)
        .await?;

    assert_eq!(logged_in.user.current_water_intake, 0);
    assert_eq!(logged_in.user.last_reset_date, now);

    Ok(())
}
