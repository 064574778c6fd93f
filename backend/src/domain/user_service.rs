//! Account registration and listing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ports::{PasswordHasher, RegisterUserRequest, UserRepository, UsersCommand, UsersQuery};
use super::service_support::{map_password_hash_error, map_user_persistence_error};
use super::{Error, Registration, User, UserId, UserWithBlogs};

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Create a new service over the given ports.
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl UsersCommand for UserService {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, Error> {
        let RegisterUserRequest {
            username,
            name,
            password,
        } = request;
        let registration = Registration::try_from_parts(username, name, password)
            .map_err(|err| Error::weak_credential(err.to_string()))?;

        let password_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(map_password_hash_error)?;
        let user = User::new(
            UserId::random(),
            registration.username().clone(),
            registration.name().map(str::to_owned),
            password_hash,
        );
        self.users
            .insert(&user)
            .await
            .map_err(map_user_persistence_error)?;

        info!(user_id = %user.id(), username = %user.username(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl UsersQuery for UserService {
    async fn list(&self) -> Result<Vec<UserWithBlogs>, Error> {
        self.users
            .list_with_blogs()
            .await
            .map_err(map_user_persistence_error)
    }
}
