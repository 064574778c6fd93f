//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{BlogId, User, UserId, UserWithBlogs};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already uses this username.
        DuplicateUsername { username: String } => "username {username} is already taken",
    }
}

/// Storage contract for user accounts and their blog links.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user in insertion order, each joined with the blogs it
    /// owns.
    async fn list_with_blogs(&self) -> Result<Vec<UserWithBlogs>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by exact username.
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, UserPersistenceError>;

    /// Store a new user.
    ///
    /// Fails with [`UserPersistenceError::DuplicateUsername`] when the
    /// username is taken.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Append `blog` to the user's owned blogs.
    async fn link_blog(&self, user: &UserId, blog: &BlogId) -> Result<(), UserPersistenceError>;

    /// Remove `blog` from the user's owned blogs; unknown links are ignored.
    async fn unlink_blog(&self, user: &UserId, blog: &BlogId)
    -> Result<(), UserPersistenceError>;
}
