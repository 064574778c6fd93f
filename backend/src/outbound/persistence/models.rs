//! Internal Diesel row structs. Never exposed outside the persistence module.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{blogs, user_blogs, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

/// Insertable user record; `seq` and `created_at` come from column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub name: Option<&'a str>,
    pub password_hash: &'a str,
}

/// Row read from `blogs`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = blogs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BlogRow {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = blogs)]
pub(crate) struct NewBlogRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub author: &'a str,
    pub url: &'a str,
    pub likes: i64,
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = user_blogs)]
pub(crate) struct NewUserBlogRow {
    pub user_id: Uuid,
    pub blog_id: Uuid,
}
