use sea_orm::entity::prelude::*;

/// Registered account with its daily goal and denormalized running total.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub daily_water_goal: i32,
    pub current_water_intake: i32,
    pub last_reset_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::water_log::Entity")]
    WaterLog,
}

impl Related<super::water_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WaterLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
