//! Translation of pool and Diesel failures into repository port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{BlogPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Coarse classification shared by both repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Failure {
    Connection(&'static str),
    Query(&'static str),
    UniqueViolation,
}

pub(super) fn classify(error: &DieselError) -> Failure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => Failure::Query("record not found"),
        DieselError::QueryBuilderError(_) => Failure::Query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            Failure::Connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            Failure::UniqueViolation
        }
        _ => Failure::Query("database error"),
    }
}

pub(super) fn blog_pool_error(error: PoolError) -> BlogPersistenceError {
    BlogPersistenceError::connection(error.into_message())
}

pub(super) fn user_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

pub(super) fn blog_diesel_error(error: DieselError) -> BlogPersistenceError {
    match classify(&error) {
        Failure::Connection(message) => BlogPersistenceError::connection(message),
        Failure::Query(message) => BlogPersistenceError::query(message),
        Failure::UniqueViolation => BlogPersistenceError::query("blog already exists"),
    }
}

pub(super) fn user_diesel_error(error: DieselError) -> UserPersistenceError {
    match classify(&error) {
        Failure::Connection(message) => UserPersistenceError::connection(message),
        Failure::Query(message) => UserPersistenceError::query(message),
        Failure::UniqueViolation => UserPersistenceError::query("unique constraint violated"),
    }
}

/// Like [`user_diesel_error`], but a unique violation means `username` is
/// taken.
pub(super) fn user_insert_error(error: DieselError, username: &str) -> UserPersistenceError {
    if matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    ) {
        debug!(username, "username already taken");
        return UserPersistenceError::duplicate_username(username);
    }
    user_diesel_error(error)
}
