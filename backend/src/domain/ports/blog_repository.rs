//! Port abstraction for blog persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Blog, BlogId, BlogWithOwner};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by blog repository adapters.
    pub enum BlogPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "blog repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "blog repository query failed: {message}",
    }
}

/// Storage contract for blogs.
///
/// Adapters perform the owner join themselves so the domain never issues a
/// follow-up lookup per blog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Every stored blog in insertion order, each joined with its owner.
    async fn list_with_owners(&self) -> Result<Vec<BlogWithOwner>, BlogPersistenceError>;

    /// Fetch a blog by identifier.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogPersistenceError>;

    /// Store a new blog.
    async fn insert(&self, blog: &Blog) -> Result<(), BlogPersistenceError>;

    /// Replace the like count and return the updated blog, or `None` when no
    /// blog has this id.
    async fn update_likes(
        &self,
        id: &BlogId,
        likes: u64,
    ) -> Result<Option<Blog>, BlogPersistenceError>;

    /// Remove a blog. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &BlogId) -> Result<bool, BlogPersistenceError>;
}
