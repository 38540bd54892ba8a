//! User service for business logic.
//!
//! This module provides the `UserService` for profile reads, goal updates and the
//! leaderboard. It works with domain models rather than DTOs.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::cmp::Reverse;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::intake::IntakeService,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's profile with the daily reset applied.
    ///
    /// # Arguments
    /// - `user` - Authenticated user
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(User)` - User as currently stored
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - User no longer exists
    /// - `Err(AppError::DbErr)` - Database error during reset or reload
    pub async fn get_profile(&self, user: User, now: DateTime<Utc>) -> Result<User, AppError> {
        let user_id = user.id;
        IntakeService::new(self.db).evaluate_reset(user, now).await?;

        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    /// Sets a new daily goal for the user.
    ///
    /// The goal must already be validated to the accepted range.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new goal
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - User no longer exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_goal(
        &self,
        user: &User,
        goal: i32,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.update_goal(user.id, goal, now).await? {
            return Err(AuthError::UserNotInDatabase(user.id).into());
        }

        user_repo
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user.id).into())
    }

    /// Lists all users ordered by their intake effective at `now`, highest first.
    ///
    /// Counters from earlier local days count as 0. Nothing is written back; each user's
    /// own next request performs the actual reset.
    pub async fn get_leaderboard(&self, now: DateTime<Utc>) -> Result<Vec<User>, AppError> {
        let mut users = UserRepository::new(self.db).get_all_by_intake().await?;

        // Stable sort keeps the repository's ID tie-break
        users.sort_by_key(|user| Reverse(user.effective_intake(now)));

        Ok(users)
    }
}
