//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Besides creation and lookups it owns the writes to the denormalized running total:
//! increments, floored decrements and the compare-and-set daily reset. Each of these is a
//! single UPDATE evaluated by the database so concurrent requests cannot lose updates.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::user::{CreateUserParam, User, UserCredentials},
    util::time::TimeWindow,
};

/// `current_water_intake + amount`
fn intake_plus(amount: i32) -> Expr {
    use sea_orm::sea_query::ExprTrait;

    Expr::col(entity::user::Column::CurrentWaterIntake).add(amount)
}

/// `CASE WHEN current_water_intake > amount THEN current_water_intake - amount ELSE 0 END`
fn intake_minus_floored(amount: i32) -> Expr {
    use sea_orm::sea_query::ExprTrait;

    let intake = || Expr::col(entity::user::Column::CurrentWaterIntake);
    Expr::case(intake().gt(amount), intake().sub(amount))
        .finally(0)
        .into()
}

/// Repository providing database operations for user management.
///
/// Generic over the connection so the same methods run on a pooled
/// `DatabaseConnection` or inside a `DatabaseTransaction`.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a newly registered user.
    ///
    /// The running total starts at 0 and `last_reset_date` at `param.now`.
    ///
    /// # Arguments
    /// - `param` - Name, email, hashed password, goal and creation instant
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            daily_water_goal: ActiveValue::Set(param.daily_water_goal),
            current_water_intake: ActiveValue::Set(0),
            last_reset_date: ActiveValue::Set(param.now),
            created_at: ActiveValue::Set(param.now),
            updated_at: ActiveValue::Set(param.now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user together with their password hash by email, for login.
    ///
    /// # Arguments
    /// - `email` - Exact email the user registered with
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User and stored hash
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Checks whether an account already uses `email`.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Retrieves every user ordered by stored running total, highest first.
    ///
    /// Ties are broken by ID so the order is stable. Stored totals may be stale; callers
    /// apply the reset rule when presenting them.
    pub async fn get_all_by_intake(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CurrentWaterIntake)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets the user's daily goal.
    ///
    /// # Arguments
    /// - `user_id` - User to update
    /// - `goal` - New goal in ml, already validated
    /// - `now` - Value for `updated_at`
    ///
    /// # Returns
    /// - `Ok(true)` - Goal updated
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_goal(
        &self,
        user_id: i32,
        goal: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::DailyWaterGoal, Expr::value(goal))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds `amount` to the running total in a single UPDATE.
    ///
    /// # Returns
    /// - `Ok(true)` - Total updated
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_intake(
        &self,
        user_id: i32,
        amount: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::CurrentWaterIntake,
                intake_plus(amount),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Subtracts `amount` from the running total, never going below 0.
    ///
    /// # Returns
    /// - `Ok(true)` - Total updated
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement_intake(
        &self,
        user_id: i32,
        amount: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::CurrentWaterIntake,
                intake_minus_floored(amount),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Zeroes the running total unless it was already reset inside `today`.
    ///
    /// The update only matches while the stored `last_reset_date` lies outside the
    /// window, so of several concurrent callers exactly one performs the write.
    ///
    /// # Arguments
    /// - `user_id` - User whose counter is reset
    /// - `today` - Local day window containing `now`
    /// - `now` - New `last_reset_date` and `updated_at`
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the reset
    /// - `Ok(false)` - Counter was already reset today, or no such user
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset_intake(
        &self,
        user_id: i32,
        today: TimeWindow,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(
                Condition::any()
                    .add(entity::user::Column::LastResetDate.lt(today.start))
                    .add(entity::user::Column::LastResetDate.gte(today.end)),
            )
            .col_expr(entity::user::Column::CurrentWaterIntake, Expr::value(0))
            .col_expr(entity::user::Column::LastResetDate, Expr::value(now))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
