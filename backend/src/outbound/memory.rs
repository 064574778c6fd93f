//! In-process store implementing both repository ports.
//!
//! Backs development runs without `DATABASE_URL` and the HTTP test suites.
//! One mutex guards users and blogs together so that joins observe a
//! consistent snapshot.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    BlogPersistenceError, BlogRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Blog, BlogId, BlogSummary, BlogWithOwner, OwnerSummary, User, UserId, UserWithBlogs,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    blogs: Vec<Blog>,
}

impl Tables {
    fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    fn user_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id() == id)
    }

    fn blog(&self, id: &BlogId) -> Option<&Blog> {
        self.blogs.iter().find(|blog| blog.id() == id)
    }
}

/// Users and blogs held in memory, listed in insertion order.
///
/// # Examples
/// ```
/// use bloglist::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::default();
/// # let _ = store;
/// ```
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the guard leaves the tables untouched because
    // every mutation below completes before returning.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BlogRepository for InMemoryStore {
    async fn list_with_owners(&self) -> Result<Vec<BlogWithOwner>, BlogPersistenceError> {
        let tables = self.tables();
        Ok(tables
            .blogs
            .iter()
            .map(|blog| BlogWithOwner {
                blog: blog.clone(),
                owner: blog
                    .owner()
                    .and_then(|owner| tables.user(owner))
                    .map(|user| OwnerSummary {
                        id: user.id().clone(),
                        username: user.username().clone(),
                        name: user.name().map(str::to_owned),
                    }),
            })
            .collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogPersistenceError> {
        Ok(self.tables().blog(id).cloned())
    }

    async fn insert(&self, blog: &Blog) -> Result<(), BlogPersistenceError> {
        let mut tables = self.tables();
        if tables.blog(blog.id()).is_some() {
            return Err(BlogPersistenceError::query(format!(
                "blog {} already exists",
                blog.id()
            )));
        }
        tables.blogs.push(blog.clone());
        Ok(())
    }

    async fn update_likes(
        &self,
        id: &BlogId,
        likes: u64,
    ) -> Result<Option<Blog>, BlogPersistenceError> {
        let mut tables = self.tables();
        let Some(slot) = tables.blogs.iter_mut().find(|blog| blog.id() == id) else {
            return Ok(None);
        };
        *slot = slot.clone().with_likes(likes);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &BlogId) -> Result<bool, BlogPersistenceError> {
        let mut tables = self.tables();
        let before = tables.blogs.len();
        tables.blogs.retain(|blog| blog.id() != id);
        Ok(tables.blogs.len() != before)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list_with_blogs(&self) -> Result<Vec<UserWithBlogs>, UserPersistenceError> {
        let tables = self.tables();
        Ok(tables
            .users
            .iter()
            .map(|user| UserWithBlogs {
                user: user.clone(),
                blogs: user
                    .blogs()
                    .iter()
                    .filter_map(|id| tables.blog(id))
                    .map(BlogSummary::from)
                    .collect(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.tables().user(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .tables()
            .users
            .iter()
            .find(|user| user.username().as_ref() == username)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut tables = self.tables();
        if tables
            .users
            .iter()
            .any(|existing| existing.username() == user.username())
        {
            return Err(UserPersistenceError::duplicate_username(
                user.username().as_ref(),
            ));
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn link_blog(&self, user: &UserId, blog: &BlogId) -> Result<(), UserPersistenceError> {
        let mut tables = self.tables();
        let owner = tables
            .user_mut(user)
            .ok_or_else(|| UserPersistenceError::query(format!("user {user} does not exist")))?;
        owner.link_blog(blog.clone());
        Ok(())
    }

    async fn unlink_blog(
        &self,
        user: &UserId,
        blog: &BlogId,
    ) -> Result<(), UserPersistenceError> {
        if let Some(owner) = self.tables().user_mut(user) {
            owner.unlink_blog(blog);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
