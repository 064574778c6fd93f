//! Port for issuing and verifying bearer tokens.
//!
//! The signing secret belongs to the adapter; the domain only asks for a
//! token to be minted for a user or for a presented token to be resolved to
//! the user id it was issued for.

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token adapters.
    pub enum TokenError {
        /// Token was malformed, expired, or carried a bad signature.
        Invalid { message: String } => "token rejected: {message}",
        /// Token could not be produced.
        Signing { message: String } => "token signing failed: {message}",
    }
}

/// Signs and verifies bearer tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Mint a token whose subject is `user`.
    fn issue(&self, user: &User) -> Result<String, TokenError>;

    /// Resolve a presented token to the user id it was issued for.
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}
