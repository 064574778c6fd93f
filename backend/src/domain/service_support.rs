//! Translation of port errors into API errors shared by the domain services.

use tracing::warn;

use super::Error;
use super::ports::{
    BlogPersistenceError, PasswordHashError, TokenError, TokenService, UserPersistenceError,
};
use super::{BearerToken, UserId};

pub(crate) const TOKEN_REJECTED: &str = "token missing or invalid";

pub(crate) fn map_blog_persistence_error(error: BlogPersistenceError) -> Error {
    match error {
        BlogPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("blog repository unavailable: {message}"))
        }
        BlogPersistenceError::Query { message } => {
            Error::internal(format!("blog repository error: {message}"))
        }
    }
}

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { username } => {
            Error::duplicate_username(format!("username {username} is already taken"))
        }
    }
}

pub(crate) fn map_password_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

pub(crate) fn map_token_signing_error(error: TokenError) -> Error {
    Error::internal(error.to_string())
}

/// Resolve an optional bearer token to the id of the user it was issued to.
///
/// A missing token and a rejected one produce the same `invalid_token` error.
pub(crate) fn verify_bearer(
    tokens: &dyn TokenService,
    token: Option<&BearerToken>,
) -> Result<UserId, Error> {
    let Some(token) = token else {
        warn!("request carried no bearer token");
        return Err(Error::invalid_token(TOKEN_REJECTED));
    };
    tokens.verify(token.as_str()).map_err(|err| {
        warn!(error = %err, "bearer token rejected");
        Error::invalid_token(TOKEN_REJECTED)
    })
}
