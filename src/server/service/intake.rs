//! Intake service: daily reset evaluation and running-total mutations.
//!
//! Every operation that reads or changes a user's own running total first calls
//! [`IntakeService::evaluate_reset`], so the counter is zeroed lazily on the first request
//! of each local day. Adding and deleting logs run in a transaction that writes the log
//! and adjusts the counter with a single SQL expression.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, Order, TransactionTrait};

use crate::server::{
    data::{user::UserRepository, water_log::WaterLogRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        user::User,
        water_log::{CreateWaterLogParam, IntakeChange, WaterLog},
    },
    util::time::{day_window, local_date, should_reset, TimeWindow},
};

fn today_window(now: DateTime<Utc>) -> Result<TimeWindow, InternalError> {
    let today = local_date(now);
    day_window(today).ok_or(InternalError::DateOutOfRange(today))
}

pub struct IntakeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IntakeService<'a> {
    /// Creates a new IntakeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Zeroes the user's running total if it belongs to an earlier local day.
    ///
    /// The write is a compare-and-set on `last_reset_date`, so concurrent requests for the
    /// same user perform at most one reset. Whether or not this call won, the user is
    /// reloaded to pick up the stored state.
    ///
    /// # Arguments
    /// - `user` - User as loaded for the current request
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(User)` - The user, unchanged if no reset was due
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - User was deleted meanwhile
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn evaluate_reset(&self, user: User, now: DateTime<Utc>) -> Result<User, AppError> {
        if !should_reset(user.last_reset_date, now) {
            return Ok(user);
        }

        let user_repo = UserRepository::new(self.db);
        let today = today_window(now)?;

        if user_repo.reset_intake(user.id, today, now).await? {
            tracing::info!(
                "Reset daily intake of user {} (was {} ml since {})",
                user.id,
                user.current_water_intake,
                local_date(user.last_reset_date)
            );
        }

        user_repo
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user.id).into())
    }

    /// Records a new log and adds its amount to the running total.
    ///
    /// # Arguments
    /// - `user` - Authenticated user
    /// - `param` - Log to insert; its `created_at` is the current instant
    ///
    /// # Returns
    /// - `Ok(IntakeChange)` - Created log and the new running total
    /// - `Err(AppError::InternalErr(UserVanished))` - User row disappeared mid-transaction
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn add_water(
        &self,
        user: User,
        param: CreateWaterLogParam,
    ) -> Result<IntakeChange, AppError> {
        let now = param.created_at;
        let user = self.evaluate_reset(user, now).await?;

        let txn = self.db.begin().await?;

        let log = WaterLogRepository::new(&txn).create(param).await?;

        let user_repo = UserRepository::new(&txn);
        if !user_repo.increment_intake(user.id, log.amount, now).await? {
            return Err(InternalError::UserVanished(user.id).into());
        }
        let updated = user_repo
            .find_by_id(user.id)
            .await?
            .ok_or(InternalError::UserVanished(user.id))?;

        txn.commit().await?;

        Ok(IntakeChange {
            log,
            new_total: updated.current_water_intake,
        })
    }

    /// Deletes one of the user's logs and takes its amount off the running total.
    ///
    /// The total only changes when the log belongs to the counter's current day, so
    /// deleting an older log leaves today's total alone. The total never goes below 0.
    /// A log removed by a concurrent request between lookup and delete is reported as
    /// not found.
    ///
    /// # Arguments
    /// - `user` - Authenticated user
    /// - `log_id` - Log to delete
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(IntakeChange)` - Deleted log and the new running total
    /// - `Err(AppError::NotFound)` - No log with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Log belongs to another user
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn delete_water(
        &self,
        user: User,
        log_id: i32,
        now: DateTime<Utc>,
    ) -> Result<IntakeChange, AppError> {
        let user = self.evaluate_reset(user, now).await?;

        let Some(log) = WaterLogRepository::new(self.db).find_by_id(log_id).await? else {
            return Err(AppError::NotFound("Water log not found".to_string()));
        };

        if log.user_id != user.id {
            return Err(AuthError::AccessDenied {
                user_id: user.id,
                log_id,
            }
            .into());
        }

        // First statement must write, or SQLite may fail the lock upgrade with BUSY
        let txn = self.db.begin().await?;

        if !WaterLogRepository::new(&txn).delete(log.id).await? {
            return Err(AppError::NotFound("Water log not found".to_string()));
        }

        let user_repo = UserRepository::new(&txn);
        if local_date(log.created_at) == local_date(user.last_reset_date) {
            user_repo.decrement_intake(user.id, log.amount, now).await?;
        }
        let updated = user_repo
            .find_by_id(user.id)
            .await?
            .ok_or(InternalError::UserVanished(user.id))?;

        txn.commit().await?;

        Ok(IntakeChange {
            log,
            new_total: updated.current_water_intake,
        })
    }

    /// Retrieves today's logs for the user, newest first.
    pub async fn history(&self, user: &User, now: DateTime<Utc>) -> Result<Vec<WaterLog>, AppError> {
        let today = today_window(now)?;
        let logs = WaterLogRepository::new(self.db)
            .get_by_user_in_window(user.id, today, Order::Desc)
            .await?;

        Ok(logs)
    }
}
