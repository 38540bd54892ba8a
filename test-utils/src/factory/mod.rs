//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own factory module with both a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let log = factory::water_log::create_water_log(&db, user.id, 250).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("someone@example.com")
//!     .daily_water_goal(2500)
//!     .current_water_intake(750)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `water_log` - Create water log entities
//! - `helpers` - Unique value generation

pub mod helpers;
pub mod user;
pub mod water_log;

pub use user::create_user;
pub use water_log::create_water_log;
