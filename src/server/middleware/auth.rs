use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves the user behind a request's `Authorization: Bearer` header.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires a valid bearer token for an existing user.
    ///
    /// # Returns
    /// - `Ok(User)` - User the token was issued to, freshly loaded
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request (401)
    /// - `Err(AuthError::InvalidToken)` - Malformed, badly signed or expired token (403)
    /// - `Err(AuthError::UserNotInDatabase)` - Token user no longer exists (404)
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        Ok(user)
    }

    fn bearer_token(&self) -> Option<&'a str> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
