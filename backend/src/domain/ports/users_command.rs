//! Driving port for account registration.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Unvalidated fields of a registration request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegisterUserRequest {
    /// Requested login name.
    pub username: Option<String>,
    /// Optional display name.
    pub name: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Domain use-case port for creating accounts.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new account.
    ///
    /// # Errors
    ///
    /// - `weak_credential` when the password or username is too short;
    ///   nothing is hashed or stored in that case.
    /// - `duplicate_username` when the username is taken.
    async fn register(&self, request: RegisterUserRequest) -> Result<User, Error>;
}
