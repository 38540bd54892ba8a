//! Registration and login.

pub mod password;
pub mod token;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthenticatedUser, CreateUserParam, RegisterUserParam, DEFAULT_DAILY_WATER_GOAL},
    service::{
        auth::{
            password::{hash_password, verify_password},
            token::TokenService,
        },
        intake::IntakeService,
    },
};

const EMAIL_TAKEN: &str = "User already exists with this email";

/// Service handling account creation and credential checks.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign bearer tokens
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and signs a token for it.
    ///
    /// New users get the default daily goal and an empty running total.
    ///
    /// # Arguments
    /// - `param` - Validated name, email and plain text password
    /// - `now` - Registration instant
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Created user and token
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::InternalErr)` - Hashing or signing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(
        &self,
        param: RegisterUserParam,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&param.email).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        // A concurrent registration can still win the race to the unique index
        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                daily_water_goal: DEFAULT_DAILY_WATER_GOAL,
                now,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict(EMAIL_TAKEN.to_string())
                }
                _ => AppError::DbErr(err),
            })?;

        tracing::info!("Registered user {}", user.id);

        let token = self.tokens.issue(user.id, now)?;

        Ok(AuthenticatedUser { user, token })
    }

    /// Checks credentials, applies the daily reset and signs a token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Arguments
    /// - `email` - Email the account was registered with
    /// - `password` - Plain text password
    /// - `now` - Login instant
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - User with an up-to-date running total, and token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::InternalErr)` - Stored hash unreadable or signing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = IntakeService::new(self.db)
            .evaluate_reset(credentials.user, now)
            .await?;

        let token = self.tokens.issue(user.id, now)?;

        Ok(AuthenticatedUser { user, token })
    }
}
