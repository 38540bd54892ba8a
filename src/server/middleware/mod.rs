//! Request guards and extractors.
//!
//! - `auth` - Bearer token guard returning the request's user
//! - `validate` - JSON body extractor with field validation

pub mod auth;
pub mod validate;
