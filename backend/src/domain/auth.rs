//! Authentication primitives: login credentials, registration input and the
//! outcome of a successful login.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::{USERNAME_MIN, Username};

/// Minimum allowed length, in characters, for a plaintext password.
pub const PASSWORD_MIN: usize = 3;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace.
///
/// # Examples
/// ```
/// use bloglist::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("mluukkai", "salainen").unwrap();
/// assert_eq!(creds.username(), "mluukkai");
/// assert_eq!(creds.password(), "salainen");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Reasons a registration payload is rejected before anything is hashed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Password shorter than [`PASSWORD_MIN`] or absent.
    #[error("password must be at least {min} characters long")]
    PasswordTooShort {
        /// Required minimum length.
        min: usize,
    },
    /// Username shorter than [`USERNAME_MIN`] or absent.
    #[error("username must be at least {min} characters long")]
    UsernameTooShort {
        /// Required minimum length.
        min: usize,
    },
}

/// Validated input for creating an account.
///
/// The password is checked first so a weak password is reported even when
/// the username is also invalid.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    name: Option<String>,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate raw registration fields.
    pub fn try_from_parts(
        username: Option<String>,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<Self, RegistrationError> {
        let password = Zeroizing::new(password.unwrap_or_default());
        if password.chars().count() < PASSWORD_MIN {
            return Err(RegistrationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        let username = Username::new(username.unwrap_or_default())
            .map_err(|_| RegistrationError::UsernameTooShort { min: USERNAME_MIN })?;

        Ok(Self {
            username,
            name,
            password,
        })
    }

    /// Requested login name.
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Plaintext password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Raw bearer token lifted from an `Authorization` header.
///
/// The value is opaque to the domain until a `TokenService` verifies it.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Wrap the token text that followed the `Bearer ` scheme.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Token text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Signed bearer token.
    pub token: String,
    /// Username of the authenticated account.
    pub username: Username,
    /// Display name of the authenticated account.
    pub name: Option<String>,
}
