//! Outward JSON shapes for blogs and users.
//!
//! Domain entities never derive `Serialize`; handlers convert them here so
//! identifiers are exposed as plain `id` strings and password hashes cannot
//! leak.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    Blog, BlogSummary, BlogWithOwner, LoginOutcome, OwnerSummary, User, UserWithBlogs,
};

/// Blog as returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicBlog {
    /// Blog identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Title.
    #[schema(example = "React patterns")]
    pub title: String,
    /// Author as free text.
    #[schema(example = "Michael Chan")]
    pub author: String,
    /// Link to the post.
    #[schema(example = "https://reactpatterns.com/")]
    pub url: String,
    /// Like count.
    pub likes: u64,
    /// Owning user id, absent for blogs created without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl From<&Blog> for PublicBlog {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id().to_string(),
            title: blog.title().to_owned(),
            author: blog.author().to_owned(),
            url: blog.url().to_owned(),
            likes: blog.likes(),
            user: blog.owner().map(ToString::to_string),
        }
    }
}

/// Owner fields embedded in a blog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicOwner {
    /// Login name.
    pub username: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// User identifier.
    pub id: String,
}

impl From<&OwnerSummary> for PublicOwner {
    fn from(owner: &OwnerSummary) -> Self {
        Self {
            username: owner.username.to_string(),
            name: owner.name.clone(),
            id: owner.id.to_string(),
        }
    }
}

/// Blog as returned by `GET /api/blogs`, owner expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicBlogWithOwner {
    /// Blog identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Author as free text.
    pub author: String,
    /// Link to the post.
    pub url: String,
    /// Like count.
    pub likes: u64,
    /// Expanded owner, absent when the blog has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicOwner>,
}

impl From<&BlogWithOwner> for PublicBlogWithOwner {
    fn from(entry: &BlogWithOwner) -> Self {
        let blog = &entry.blog;
        Self {
            id: blog.id().to_string(),
            title: blog.title().to_owned(),
            author: blog.author().to_owned(),
            url: blog.url().to_owned(),
            likes: blog.likes(),
            user: entry.owner.as_ref().map(PublicOwner::from),
        }
    }
}

/// User as returned by registration; `blogs` lists ids only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicUser {
    /// User identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ids of owned blogs.
    pub blogs: Vec<String>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            name: user.name().map(str::to_owned),
            blogs: user.blogs().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Blog fields embedded in a user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicBlogSummary {
    /// Link to the post.
    pub url: String,
    /// Title.
    pub title: String,
    /// Author as free text.
    pub author: String,
    /// Blog identifier.
    pub id: String,
}

impl From<&BlogSummary> for PublicBlogSummary {
    fn from(blog: &BlogSummary) -> Self {
        Self {
            url: blog.url.clone(),
            title: blog.title.clone(),
            author: blog.author.clone(),
            id: blog.id.to_string(),
        }
    }
}

/// User as returned by `GET /api/users`, blogs expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicUserWithBlogs {
    /// User identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owned blogs.
    pub blogs: Vec<PublicBlogSummary>,
}

impl From<&UserWithBlogs> for PublicUserWithBlogs {
    fn from(entry: &UserWithBlogs) -> Self {
        let user = &entry.user;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            name: user.name().map(str::to_owned),
            blogs: entry.blogs.iter().map(PublicBlogSummary::from).collect(),
        }
    }
}

/// Body returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token to send as `Authorization: Bearer <token>`.
    pub token: String,
    /// Login name.
    pub username: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            token: outcome.token,
            username: outcome.username.to_string(),
            name: outcome.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogDraft, BlogId, PasswordHash, UserId, Username};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn user() -> User {
        User::new(
            UserId::random(),
            Username::new("hellas").expect("valid username"),
            Some("Arto Hellas".to_owned()),
            PasswordHash::new("$2b$10$secret-hash"),
        )
    }

    fn blog(owner: Option<&UserId>) -> Blog {
        let draft = BlogDraft::try_from_parts(
            Some("React patterns".to_owned()),
            Some("Michael Chan".to_owned()),
            Some("https://reactpatterns.com/".to_owned()),
            Some(7),
        )
        .expect("valid draft");
        Blog::from_draft(BlogId::random(), draft, owner.cloned())
    }

    #[rstest]
    fn public_user_never_carries_the_hash() {
        let user = user();
        let value = serde_json::to_value(PublicUser::from(&user)).expect("serialise");
        let rendered = value.to_string();
        assert!(!rendered.contains("secret-hash"));
        assert_eq!(value["id"], json!(user.id().to_string()));
        assert_eq!(value["blogs"], json!([]));
    }

    #[rstest]
    fn public_blog_exposes_owner_id_as_user() {
        let owner = UserId::random();
        let blog = blog(Some(&owner));
        let value = serde_json::to_value(PublicBlog::from(&blog)).expect("serialise");
        assert_eq!(value["user"], json!(owner.to_string()));
        assert_eq!(value["likes"], json!(7));
    }

    #[rstest]
    fn unowned_blog_omits_user() {
        let value = serde_json::to_value(PublicBlog::from(&blog(None))).expect("serialise");
        assert_eq!(value.get("user"), None::<&Value>);
    }

    #[rstest]
    fn listing_expands_owner() {
        let user = user();
        let entry = BlogWithOwner {
            blog: blog(Some(user.id())),
            owner: Some(OwnerSummary {
                id: user.id().clone(),
                username: user.username().clone(),
                name: user.name().map(str::to_owned),
            }),
        };
        let value = serde_json::to_value(PublicBlogWithOwner::from(&entry)).expect("serialise");
        assert_eq!(
            value["user"],
            json!({
                "username": "hellas",
                "name": "Arto Hellas",
                "id": user.id().to_string(),
            })
        );
    }
}
