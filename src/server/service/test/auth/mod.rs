use super::fixed_now;
use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::RegisterUserParam,
    service::auth::{token::TokenService, AuthService},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod login;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::days(7))
}

fn register_param(email: &str) -> RegisterUserParam {
    RegisterUserParam {
        name: "Zeynep".to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
    }
}
