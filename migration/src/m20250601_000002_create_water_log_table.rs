use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WaterLog::Table)
                    .if_not_exists()
                    .col(pk_auto(WaterLog::Id))
                    .col(integer(WaterLog::UserId))
                    .col(integer(WaterLog::Amount))
                    .col(string_len_null(WaterLog::Note, 255))
                    .col(
                        timestamp_with_time_zone(WaterLog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_water_log_user_id")
                            .from(WaterLog::Table, WaterLog::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_water_log_user_id_created_at")
                    .table(WaterLog::Table)
                    .col(WaterLog::UserId)
                    .col(WaterLog::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WaterLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WaterLog {
    #[sea_orm(iden = "water_logs")]
    Table,
    Id,
    UserId,
    Amount,
    Note,
    CreatedAt,
}
