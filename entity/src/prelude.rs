pub use super::user::Entity as User;
pub use super::water_log::Entity as WaterLog;
