//! Credential checking and token issuance.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::ports::{LoginService, PasswordHasher, TokenService, UserRepository};
use super::service_support::{
    map_password_hash_error, map_token_signing_error, map_user_persistence_error,
};
use super::{Error, LoginCredentials, LoginOutcome};

const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Login service backed by the user repository.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    /// Create a new service over the given ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginService for AuthService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, Error> {
        let user = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_persistence_error)?;

        let authenticated = match &user {
            Some(user) => self
                .hasher
                .verify(credentials.password(), user.password_hash())
                .await
                .map_err(map_password_hash_error)?,
            None => false,
        };
        let Some(user) = user.filter(|_| authenticated) else {
            warn!(username = credentials.username(), "login rejected");
            return Err(Error::invalid_credentials(INVALID_CREDENTIALS));
        };

        let token = self.tokens.issue(&user).map_err(map_token_signing_error)?;
        info!(user_id = %user.id(), "user logged in");
        Ok(LoginOutcome {
            token,
            username: user.username().clone(),
            name: user.name().map(str::to_owned),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{MockPasswordHasher, MockTokenService, MockUserRepository};
    use crate::domain::{ErrorCode, PasswordHash, User, UserId, Username};
    use rstest::rstest;

    fn stored_user() -> User {
        User::new(
            UserId::random(),
            Username::new("mluukkai").expect("valid username"),
            Some("Matti Luukkainen".to_owned()),
            PasswordHash::new("stored-hash"),
        )
    }

    fn hasher_accepting(password: &'static str) -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .returning(move |candidate, hash| {
                Ok(candidate == password && hash.as_ref() == "stored-hash")
            });
        hasher
    }

    fn credentials(password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts("mluukkai", password).expect("credential shape")
    }

    #[rstest]
    #[tokio::test]
    async fn login_issues_token_for_matching_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|username| username == "mluukkai")
            .returning(|_| Ok(Some(stored_user())));
        let mut tokens = MockTokenService::new();
        tokens
            .expect_issue()
            .times(1)
            .returning(|user| Ok(format!("token-for-{}", user.username())));
        let service = AuthService::new(
            Arc::new(users),
            Arc::new(hasher_accepting("salainen")),
            Arc::new(tokens),
        );

        let outcome = service
            .login(&credentials("salainen"))
            .await
            .expect("login succeeds");

        assert_eq!(outcome.token, "token-for-mluukkai");
        assert_eq!(outcome.username.as_ref(), "mluukkai");
        assert_eq!(outcome.name.as_deref(), Some("Matti Luukkainen"));
    }

    #[rstest]
    #[case::wrong_password(true)]
    #[case::unknown_user(false)]
    #[tokio::test]
    async fn login_failures_are_indistinguishable(#[case] user_exists: bool) {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(user_exists.then(stored_user)));
        let mut tokens = MockTokenService::new();
        tokens.expect_issue().never();
        let service = AuthService::new(
            Arc::new(users),
            Arc::new(hasher_accepting("salainen")),
            Arc::new(tokens),
        );

        let err = service
            .login(&credentials("wrong"))
            .await
            .expect_err("login rejected");

        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }
}
