//! Blog domain service.
//!
//! Implements the [`BlogsCommand`] and [`BlogsQuery`] driving ports. Token
//! verification and ownership checks live here so every inbound adapter gets
//! the same ordering of failures.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use super::ports::{
    BlogRepository, BlogsCommand, BlogsQuery, CreateBlogRequest, TokenService, UserPersistenceError,
    UserRepository,
};
use super::service_support::{
    map_blog_persistence_error, map_user_persistence_error, verify_bearer,
};
use super::{
    BearerToken, Blog, BlogDraft, BlogId, BlogValidationError, BlogWithOwner, Error, LIKES_MAX,
    User, UserId,
};

const MALFORMED_ID: &str = "malformatted id";

/// Blog service implementing the blog driving ports.
#[derive(Clone)]
pub struct BlogService {
    blogs: Arc<dyn BlogRepository>,
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
}

impl BlogService {
    /// Create a new service over the given ports.
    pub fn new(
        blogs: Arc<dyn BlogRepository>,
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            blogs,
            users,
            tokens,
        }
    }

    fn parse_id(raw: &str) -> Result<BlogId, Error> {
        BlogId::new(raw).map_err(|_| Error::invalid_id(MALFORMED_ID))
    }

    /// Verify `token` and load the user it was issued to.
    async fn acting_user(&self, token: Option<&BearerToken>) -> Result<User, Error> {
        let user_id = verify_bearer(self.tokens.as_ref(), token)?;
        self.users
            .find_by_id(&user_id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "token subject no longer exists");
                Error::invalid_token("token subject no longer exists")
            })
    }

    /// Undo an insert whose owner link could not be recorded.
    async fn compensate_failed_link(&self, blog: &Blog, cause: UserPersistenceError) -> Error {
        match self.blogs.delete(blog.id()).await {
            Ok(true) => {
                warn!(blog_id = %blog.id(), error = %cause, "owner link failed; blog removed");
            }
            Ok(false) => {
                error!(
                    blog_id = %blog.id(),
                    link_error = %cause,
                    "owner link failed and the blog was not found for removal; nothing was removed"
                );
            }
            Err(delete_err) => {
                error!(
                    blog_id = %blog.id(),
                    link_error = %cause,
                    delete_error = %delete_err,
                    "owner link failed and blog could not be removed; blog is orphaned"
                );
            }
        }
        Error::internal(format!("failed to link blog to owner: {cause}"))
    }
}

#[async_trait]
impl BlogsQuery for BlogService {
    async fn list(&self) -> Result<Vec<BlogWithOwner>, Error> {
        self.blogs
            .list_with_owners()
            .await
            .map_err(map_blog_persistence_error)
    }
}

#[async_trait]
impl BlogsCommand for BlogService {
    async fn authenticate(&self, token: Option<BearerToken>) -> Result<UserId, Error> {
        let user = self.acting_user(token.as_ref()).await?;
        Ok(user.id().clone())
    }

    async fn create(
        &self,
        token: Option<BearerToken>,
        request: CreateBlogRequest,
    ) -> Result<Blog, Error> {
        let user = self.acting_user(token.as_ref()).await?;

        let CreateBlogRequest {
            title,
            author,
            url,
            likes,
        } = request;
        let draft = BlogDraft::try_from_parts(title, author, url, likes).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": err.field() }))
        })?;

        let blog = Blog::from_draft(BlogId::random(), draft, Some(user.id().clone()));
        self.blogs
            .insert(&blog)
            .await
            .map_err(map_blog_persistence_error)?;
        if let Err(err) = self.users.link_blog(user.id(), blog.id()).await {
            return Err(self.compensate_failed_link(&blog, err).await);
        }

        info!(blog_id = %blog.id(), user_id = %user.id(), "blog created");
        Ok(blog)
    }

    async fn update_likes(&self, id: &str, likes: u64) -> Result<Blog, Error> {
        let id = Self::parse_id(id)?;
        if likes > LIKES_MAX {
            return Err(Error::invalid_request(BlogValidationError::LikesOutOfRange.to_string())
                .with_details(json!({ "field": "likes" })));
        }
        let updated = self
            .blogs
            .update_likes(&id, likes)
            .await
            .map_err(map_blog_persistence_error)?
            .ok_or_else(|| Error::invalid_id(format!("no blog with id {id}")))?;
        info!(blog_id = %id, likes, "blog likes updated");
        Ok(updated)
    }

    async fn delete(&self, token: Option<BearerToken>, id: &str) -> Result<(), Error> {
        let id = Self::parse_id(id)?;
        let blog = self
            .blogs
            .find_by_id(&id)
            .await
            .map_err(map_blog_persistence_error)?
            .ok_or_else(|| Error::not_found("blog not found"))?;

        let user_id = verify_bearer(self.tokens.as_ref(), token.as_ref())?;
        if !blog.is_owned_by(&user_id) {
            warn!(blog_id = %id, user_id = %user_id, "delete refused for non-owner");
            return Err(Error::forbidden("only the creator can delete a blog"));
        }

        let deleted = self
            .blogs
            .delete(&id)
            .await
            .map_err(map_blog_persistence_error)?;
        if !deleted {
            return Err(Error::not_found("blog not found"));
        }

        // The blog is gone at this point; a stale link is dropped by the
        // user listing join, so unlink failures only warrant a warning.
        if let Err(err) = self.users.unlink_blog(&user_id, &id).await {
            warn!(blog_id = %id, user_id = %user_id, error = %err, "failed to unlink deleted blog");
        }

        info!(blog_id = %id, user_id = %user_id, "blog deleted");
        Ok(())
    }
}
