//! Water log data repository for database operations.
//!
//! Provides the `WaterLogRepository` for inserting, finding, deleting and window-scanning
//! intake logs. Window scans rely on the `(user_id, created_at)` index.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::water_log::{CreateWaterLogParam, WaterLog},
    util::time::TimeWindow,
};

/// Repository providing database operations for intake logs.
pub struct WaterLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaterLogRepository<'a, C> {
    /// Creates a new WaterLogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `WaterLogRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new intake log.
    ///
    /// # Returns
    /// - `Ok(WaterLog)` - The created log with its ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown user
    pub async fn create(&self, param: CreateWaterLogParam) -> Result<WaterLog, DbErr> {
        let entity = entity::water_log::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(param.user_id),
            amount: ActiveValue::Set(param.amount),
            note: ActiveValue::Set(param.note),
            created_at: ActiveValue::Set(param.created_at),
        }
        .insert(self.db)
        .await?;

        Ok(WaterLog::from_entity(entity))
    }

    /// Finds a log by ID regardless of owner.
    ///
    /// Ownership is checked by the caller so that foreign logs can be told apart from
    /// missing ones.
    pub async fn find_by_id(&self, log_id: i32) -> Result<Option<WaterLog>, DbErr> {
        let entity = entity::prelude::WaterLog::find_by_id(log_id)
            .one(self.db)
            .await?;

        Ok(entity.map(WaterLog::from_entity))
    }

    /// Deletes a log by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Log deleted
    /// - `Ok(false)` - No log with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, log_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::WaterLog::delete_by_id(log_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Retrieves a user's logs created inside `window`.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the logs
    /// - `window` - Half-open UTC interval `[start, end)`
    /// - `order` - `Order::Asc` for reports, `Order::Desc` for history
    ///
    /// # Returns
    /// - `Ok(Vec<WaterLog>)` - Logs ordered by creation time, then ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_in_window(
        &self,
        user_id: i32,
        window: TimeWindow,
        order: Order,
    ) -> Result<Vec<WaterLog>, DbErr> {
        let entities = entity::prelude::WaterLog::find()
            .filter(entity::water_log::Column::UserId.eq(user_id))
            .filter(entity::water_log::Column::CreatedAt.gte(window.start))
            .filter(entity::water_log::Column::CreatedAt.lt(window.end))
            .order_by(entity::water_log::Column::CreatedAt, order.clone())
            .order_by(entity::water_log::Column::Id, order)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(WaterLog::from_entity).collect())
    }
}
