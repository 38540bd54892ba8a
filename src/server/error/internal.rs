use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),

    /// Signing a new bearer token failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to sign token for user {user_id}: {source}")]
    TokenSigning {
        /// The user the token was issued for
        user_id: i32,
        /// The underlying signing error
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// User row disappeared between being written and read back within one request.
    #[error("User {0} vanished while updating intake")]
    UserVanished(i32),

    /// A local day could not be turned into UTC instants.
    #[error("Date {0} is outside the representable range")]
    DateOutOfRange(chrono::NaiveDate),

    /// Binding the listener or serving HTTP failed.
    #[error("Server I/O error: {0}")]
    Server(#[from] std::io::Error),
}
