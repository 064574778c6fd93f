//! PostgreSQL implementation of the blog and user repository ports.
//!
//! Blogs record their owner in `blogs.owner_id`; the per-user blog list lives
//! in `user_blogs` so that it keeps link order and loses entries when a blog
//! row is deleted.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{
    BlogPersistenceError, BlogRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Blog, BlogDraft, BlogId, BlogSummary, BlogWithOwner, OwnerSummary, PasswordHash, User,
    UserId, UserWithBlogs, Username,
};

use super::diesel_error_mapping::{
    blog_diesel_error, blog_pool_error, user_diesel_error, user_insert_error, user_pool_error,
};
use super::models::{BlogRow, NewBlogRow, NewUserBlogRow, NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::{blogs, user_blogs, users};

/// Diesel-backed store shared by both repository ports.
#[derive(Clone)]
pub struct DieselStore {
    pool: DbPool,
}

impl DieselStore {
    /// Create a store over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn blog_from_row(row: BlogRow) -> Result<Blog, String> {
    let likes =
        u64::try_from(row.likes).map_err(|_| format!("negative likes on blog {}", row.id))?;
    let draft = BlogDraft::try_from_parts(
        Some(row.title),
        Some(row.author),
        Some(row.url),
        Some(likes),
    )
    .map_err(|err| format!("stored blog {} is invalid: {err}", row.id))?;
    Ok(Blog::from_draft(
        BlogId::from_uuid(row.id),
        draft,
        row.owner_id.map(UserId::from_uuid),
    ))
}

fn user_from_row(row: UserRow, blogs: impl IntoIterator<Item = Uuid>) -> Result<User, String> {
    let username = Username::new(row.username)
        .map_err(|err| format!("stored user {} is invalid: {err}", row.id))?;
    Ok(User::new(
        UserId::from_uuid(row.id),
        username,
        row.name,
        PasswordHash::new(row.password_hash),
    )
    .with_blogs(blogs.into_iter().map(BlogId::from_uuid)))
}

fn likes_for_db(likes: u64) -> Result<i64, String> {
    i64::try_from(likes).map_err(|_| format!("likes value {likes} exceeds storage range"))
}

async fn linked_blog_ids(
    conn: &mut AsyncPgConnection,
    user: Uuid,
) -> Result<Vec<Uuid>, UserPersistenceError> {
    user_blogs::table
        .filter(user_blogs::user_id.eq(user))
        .order(user_blogs::seq.asc())
        .select(user_blogs::blog_id)
        .load(conn)
        .await
        .map_err(user_diesel_error)
}

#[async_trait]
impl BlogRepository for DieselStore {
    async fn list_with_owners(&self) -> Result<Vec<BlogWithOwner>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(blog_pool_error)?;
        let rows: Vec<(BlogRow, Option<Uuid>, Option<String>, Option<String>)> = blogs::table
            .left_join(users::table)
            .order(blogs::seq.asc())
            .select((
                BlogRow::as_select(),
                users::id.nullable(),
                users::username.nullable(),
                users::name.nullable(),
            ))
            .load(&mut conn)
            .await
            .map_err(blog_diesel_error)?;

        rows.into_iter()
            .map(|(row, owner_id, owner_username, owner_name)| {
                let blog = blog_from_row(row).map_err(BlogPersistenceError::query)?;
                let owner = match (owner_id, owner_username) {
                    (Some(id), Some(username)) => Some(OwnerSummary {
                        id: UserId::from_uuid(id),
                        username: Username::new(username)
                            .map_err(|err| BlogPersistenceError::query(err.to_string()))?,
                        name: owner_name,
                    }),
                    _ => None,
                };
                Ok(BlogWithOwner { blog, owner })
            })
            .collect()
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(blog_pool_error)?;
        let row: Option<BlogRow> = blogs::table
            .filter(blogs::id.eq(id.as_uuid()))
            .select(BlogRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(blog_diesel_error)?;
        row.map(blog_from_row)
            .transpose()
            .map_err(BlogPersistenceError::query)
    }

    async fn insert(&self, blog: &Blog) -> Result<(), BlogPersistenceError> {
        let likes = likes_for_db(blog.likes()).map_err(BlogPersistenceError::query)?;
        let mut conn = self.pool.get().await.map_err(blog_pool_error)?;
        let row = NewBlogRow {
            id: *blog.id().as_uuid(),
            title: blog.title(),
            author: blog.author(),
            url: blog.url(),
            likes,
            owner_id: blog.owner().map(|owner| *owner.as_uuid()),
        };
        diesel::insert_into(blogs::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(blog_diesel_error)?;
        Ok(())
    }

    async fn update_likes(
        &self,
        id: &BlogId,
        likes: u64,
    ) -> Result<Option<Blog>, BlogPersistenceError> {
        let likes = likes_for_db(likes).map_err(BlogPersistenceError::query)?;
        let mut conn = self.pool.get().await.map_err(blog_pool_error)?;
        let row: Option<BlogRow> = diesel::update(blogs::table.filter(blogs::id.eq(id.as_uuid())))
            .set(blogs::likes.eq(likes))
            .returning(BlogRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(blog_diesel_error)?;
        row.map(blog_from_row)
            .transpose()
            .map_err(BlogPersistenceError::query)
    }

    async fn delete(&self, id: &BlogId) -> Result<bool, BlogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(blog_pool_error)?;
        let removed = diesel::delete(blogs::table.filter(blogs::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(blog_diesel_error)?;
        Ok(removed > 0)
    }
}

#[async_trait]
impl UserRepository for DieselStore {
    async fn list_with_blogs(&self) -> Result<Vec<UserWithBlogs>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;
        let user_rows: Vec<UserRow> = users::table
            .order(users::seq.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(user_diesel_error)?;
        let links: Vec<(Uuid, BlogRow)> = user_blogs::table
            .inner_join(blogs::table)
            .order(user_blogs::seq.asc())
            .select((user_blogs::user_id, BlogRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(user_diesel_error)?;

        let mut owned: HashMap<Uuid, Vec<Blog>> = HashMap::new();
        for (user_id, row) in links {
            let blog = blog_from_row(row).map_err(UserPersistenceError::query)?;
            owned.entry(user_id).or_default().push(blog);
        }

        user_rows
            .into_iter()
            .map(|row| {
                let blogs = owned.remove(&row.id).unwrap_or_default();
                let user = user_from_row(row, blogs.iter().map(|blog| *blog.id().as_uuid()))
                    .map_err(UserPersistenceError::query)?;
                Ok(UserWithBlogs {
                    user,
                    blogs: blogs.iter().map(BlogSummary::from).collect(),
                })
            })
            .collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(user_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };
        let blogs = linked_blog_ids(&mut conn, row.id).await?;
        user_from_row(row, blogs)
            .map(Some)
            .map_err(UserPersistenceError::query)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(user_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };
        let blogs = linked_blog_ids(&mut conn, row.id).await?;
        user_from_row(row, blogs)
            .map(Some)
            .map_err(UserPersistenceError::query)
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
            name: user.name(),
            password_hash: user.password_hash().as_ref(),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| user_insert_error(err, user.username().as_ref()))?;
        Ok(())
    }

    async fn link_blog(&self, user: &UserId, blog: &BlogId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;
        diesel::insert_into(user_blogs::table)
            .values(&NewUserBlogRow {
                user_id: *user.as_uuid(),
                blog_id: *blog.as_uuid(),
            })
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(user_diesel_error)?;
        Ok(())
    }

    async fn unlink_blog(
        &self,
        user: &UserId,
        blog: &BlogId,
    ) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(user_pool_error)?;
        diesel::delete(
            user_blogs::table
                .filter(user_blogs::user_id.eq(user.as_uuid()))
                .filter(user_blogs::blog_id.eq(blog.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(user_diesel_error)?;
        Ok(())
    }
}
