//! User data model.

use std::fmt;

use uuid::Uuid;

use super::{BlogId, BlogSummary};

/// Minimum allowed length, in characters, for a username.
pub const USERNAME_MIN: usize = 3;

/// Validation errors returned by user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// Identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// Username was shorter than [`USERNAME_MIN`].
    #[error("username must be at least {min} characters long")]
    UsernameTooShort {
        /// Required minimum length.
        min: usize,
    },
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique login name.
///
/// ## Invariants
/// - At least [`USERNAME_MIN`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a username.
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.chars().count() < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Hashed password as produced by a `PasswordHasher` adapter.
///
/// `Debug` output is redacted so hashes never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an already-computed hash.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Registered account.
///
/// ## Invariants
/// - `username` satisfies [`Username`] validation.
/// - `blogs` lists the ids of owned blogs in creation order, without
///   duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    name: Option<String>,
    password_hash: PasswordHash,
    blogs: Vec<BlogId>,
}

impl User {
    /// Build a user that owns no blogs yet.
    #[must_use]
    pub fn new(
        id: UserId,
        username: Username,
        name: Option<String>,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            id,
            username,
            name,
            password_hash,
            blogs: Vec::new(),
        }
    }

    /// Replace the owned blog list, dropping repeated ids.
    #[must_use]
    pub fn with_blogs(mut self, blogs: impl IntoIterator<Item = BlogId>) -> Self {
        self.blogs.clear();
        for blog in blogs {
            self.link_blog(blog);
        }
        self
    }

    /// Stable identifier.
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Login name.
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Optional display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Stored password hash.
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Ids of the blogs this user owns.
    pub fn blogs(&self) -> &[BlogId] {
        &self.blogs
    }

    /// Record ownership of `blog`; a repeated id is ignored.
    pub fn link_blog(&mut self, blog: BlogId) {
        if !self.blogs.contains(&blog) {
            self.blogs.push(blog);
        }
    }

    /// Forget ownership of `blog`.
    pub fn unlink_blog(&mut self, blog: &BlogId) {
        self.blogs.retain(|owned| owned != blog);
    }
}

/// User joined with the blogs it owns by the persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithBlogs {
    /// The account itself.
    pub user: User,
    /// Owned blogs in link order; ids that no longer resolve are omitted.
    pub blogs: Vec<BlogSummary>,
}

#[cfg(test)]
mod tests;
