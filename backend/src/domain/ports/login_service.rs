//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing the backing infrastructure, so
//! HTTP handler tests can substitute a test double instead of wiring
//! persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, LoginOutcome};

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and issue a bearer token.
    ///
    /// Unknown users and wrong passwords are indistinguishable to the
    /// caller: both yield `invalid_credentials`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, Error>;
}
