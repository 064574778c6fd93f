//! Driving port for blog mutations.
//!
//! Inbound adapters hand over the raw bearer token (if any) together with
//! unvalidated request fields. Token verification, ownership checks and
//! validation all happen behind this port so their ordering is fixed in one
//! place.

use async_trait::async_trait;

use crate::domain::{BearerToken, Blog, Error, UserId};

/// Unvalidated fields of a blog creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBlogRequest {
    /// Proposed title.
    pub title: Option<String>,
    /// Proposed author.
    pub author: Option<String>,
    /// Proposed URL.
    pub url: Option<String>,
    /// Initial like count; zero when absent.
    pub likes: Option<u64>,
}

/// Domain use-case port for creating, updating and deleting blogs.
#[async_trait]
pub trait BlogsCommand: Send + Sync {
    /// Resolve the token to an existing user without touching any blog.
    ///
    /// Lets adapters report `invalid_token` ahead of body decoding errors.
    ///
    /// # Errors
    ///
    /// `invalid_token` when the token is missing, invalid, or names a user
    /// that no longer exists.
    async fn authenticate(&self, token: Option<BearerToken>) -> Result<UserId, Error>;

    /// Create a blog owned by the token's subject.
    ///
    /// # Errors
    ///
    /// - `invalid_token` when the token is missing, invalid, or names a user
    ///   that no longer exists.
    /// - `invalid_request` when title, author or url is missing, or when
    ///   `likes` exceeds [`crate::domain::LIKES_MAX`].
    async fn create(
        &self,
        token: Option<BearerToken>,
        request: CreateBlogRequest,
    ) -> Result<Blog, Error>;

    /// Replace the like count of the blog with id `id`.
    ///
    /// No token is required. A malformed or unknown id yields `invalid_id`;
    /// `likes` above [`crate::domain::LIKES_MAX`] yields `invalid_request`.
    async fn update_likes(&self, id: &str, likes: u64) -> Result<Blog, Error>;

    /// Delete a blog on behalf of its owner.
    ///
    /// # Errors
    ///
    /// Checked in order: `invalid_id`, `not_found`, `invalid_token`,
    /// `forbidden`.
    async fn delete(&self, token: Option<BearerToken>, id: &str) -> Result<(), Error>;
}
