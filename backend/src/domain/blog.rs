//! Blog post data model and the read models produced by persistence joins.

use std::fmt;

use uuid::Uuid;

use super::{UserId, Username};

/// Largest like count a blog may carry; matches a signed 64-bit column.
pub const LIKES_MAX: u64 = i64::MAX.unsigned_abs();

/// Validation errors raised while building blogs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogValidationError {
    /// Identifier was not a UUID.
    #[error("malformed blog id")]
    InvalidId,
    /// Title was absent or blank.
    #[error("title is required")]
    MissingTitle,
    /// Author was absent or blank.
    #[error("author is required")]
    MissingAuthor,
    /// URL was absent or blank.
    #[error("url is required")]
    MissingUrl,
    /// Like count does not fit the storage column.
    #[error("likes must not exceed 9223372036854775807")]
    LikesOutOfRange,
}

impl BlogValidationError {
    /// Name of the offending request field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::MissingTitle => "title",
            Self::MissingAuthor => "author",
            Self::MissingUrl => "url",
            Self::LikesOutOfRange => "likes",
        }
    }
}

/// Stable blog identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Parse an identifier received from a client.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BlogValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(BlogValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| BlogValidationError::InvalidId)
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

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn required(
    value: Option<String>,
    missing: BlogValidationError,
) -> Result<String, BlogValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing),
    }
}

/// Validated contents of a blog about to be created.
///
/// ## Invariants
/// - `title`, `author` and `url` are non-blank.
/// - `likes` defaults to zero when the client omitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    author: String,
    url: String,
    likes: u64,
}

impl BlogDraft {
    /// Validate raw client input.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::BlogDraft;
    ///
    /// let draft = BlogDraft::try_from_parts(
    ///     Some("React patterns".into()),
    ///     Some("Michael Chan".into()),
    ///     Some("https://reactpatterns.com/".into()),
    ///     None,
    /// )
    /// .expect("valid draft");
    /// assert_eq!(draft.likes(), 0);
    /// ```
    pub fn try_from_parts(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<u64>,
    ) -> Result<Self, BlogValidationError> {
        let title = required(title, BlogValidationError::MissingTitle)?;
        let author = required(author, BlogValidationError::MissingAuthor)?;
        let url = required(url, BlogValidationError::MissingUrl)?;
        let likes = likes.unwrap_or(0);
        if likes > LIKES_MAX {
            return Err(BlogValidationError::LikesOutOfRange);
        }
        Ok(Self {
            title,
            author,
            url,
            likes,
        })
    }

    /// Proposed title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Proposed author.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Proposed URL.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Initial like count.
    pub const fn likes(&self) -> u64 {
        self.likes
    }
}

/// Persisted blog post.
///
/// ## Invariants
/// - `owner` is fixed at creation; only `likes` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    id: BlogId,
    title: String,
    author: String,
    url: String,
    likes: u64,
    owner: Option<UserId>,
}

impl Blog {
    /// Materialise a draft under `id`, owned by `owner`.
    #[must_use]
    pub fn from_draft(id: BlogId, draft: BlogDraft, owner: Option<UserId>) -> Self {
        let BlogDraft {
            title,
            author,
            url,
            likes,
        } = draft;
        Self {
            id,
            title,
            author,
            url,
            likes,
            owner,
        }
    }

    /// Return a copy with `likes` replaced; every other field is preserved.
    #[must_use]
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    /// Stable identifier.
    pub const fn id(&self) -> &BlogId {
        &self.id
    }

    /// Title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Author as free text; not linked to any account.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Link to the post.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Like count.
    pub const fn likes(&self) -> u64 {
        self.likes
    }

    /// Owning account, when the blog was created by an authenticated user.
    pub const fn owner(&self) -> Option<&UserId> {
        self.owner.as_ref()
    }

    /// Whether `user` owns this blog.
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner.as_ref() == Some(user)
    }
}

/// Owner fields exposed alongside a blog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary {
    /// Owner identifier.
    pub id: UserId,
    /// Owner login name.
    pub username: Username,
    /// Owner display name.
    pub name: Option<String>,
}

/// Blog joined with its owner by the persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogWithOwner {
    /// The blog itself.
    pub blog: Blog,
    /// Expanded owner; `None` for blogs created without one or whose owner
    /// no longer resolves.
    pub owner: Option<OwnerSummary>,
}

/// Blog fields exposed alongside a user listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSummary {
    /// Blog identifier.
    pub id: BlogId,
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
    /// Link to the post.
    pub url: String,
}

impl From<&Blog> for BlogSummary {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id().clone(),
            title: blog.title().to_owned(),
            author: blog.author().to_owned(),
            url: blog.url().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(value: &str) -> Option<String> {
        Some(value.to_owned())
    }

    #[rstest]
    #[case(None, text("a"), text("u"), BlogValidationError::MissingTitle)]
    #[case(text("  "), text("a"), text("u"), BlogValidationError::MissingTitle)]
    #[case(text("t"), None, text("u"), BlogValidationError::MissingAuthor)]
    #[case(text("t"), text("a"), None, BlogValidationError::MissingUrl)]
    #[case(text("t"), text("a"), text(""), BlogValidationError::MissingUrl)]
    fn draft_requires_title_author_and_url(
        #[case] title: Option<String>,
        #[case] author: Option<String>,
        #[case] url: Option<String>,
        #[case] expected: BlogValidationError,
    ) {
        let err =
            BlogDraft::try_from_parts(title, author, url, Some(1)).expect_err("invalid draft");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn draft_keeps_explicit_likes() {
        let draft = BlogDraft::try_from_parts(text("t"), text("a"), text("u"), Some(7))
            .expect("valid draft");
        assert_eq!(draft.likes(), 7);
    }

    #[rstest]
    fn draft_accepts_likes_up_to_the_column_limit() {
        let draft = BlogDraft::try_from_parts(text("t"), text("a"), text("u"), Some(LIKES_MAX))
            .expect("largest storable count");
        assert_eq!(draft.likes(), 9_223_372_036_854_775_807);
    }

    #[rstest]
    #[case(LIKES_MAX + 1)]
    #[case(u64::MAX)]
    fn draft_rejects_likes_beyond_the_column_limit(#[case] likes: u64) {
        let err = BlogDraft::try_from_parts(text("t"), text("a"), text("u"), Some(likes))
            .expect_err("too many likes");
        assert_eq!(err, BlogValidationError::LikesOutOfRange);
        assert_eq!(err.field(), "likes");
    }

    #[rstest]
    fn with_likes_preserves_owner() {
        let owner = UserId::random();
        let draft =
            BlogDraft::try_from_parts(text("t"), text("a"), text("u"), None).expect("valid draft");
        let blog = Blog::from_draft(BlogId::random(), draft, Some(owner.clone())).with_likes(42);

        assert_eq!(blog.likes(), 42);
        assert!(blog.is_owned_by(&owner));
    }

    #[rstest]
    fn unowned_blog_is_owned_by_nobody() {
        let draft =
            BlogDraft::try_from_parts(text("t"), text("a"), text("u"), None).expect("valid draft");
        let blog = Blog::from_draft(BlogId::random(), draft, None);
        assert!(!blog.is_owned_by(&UserId::random()));
    }

    #[rstest]
    #[case("5a422a851b54a676234d17f7")]
    #[case("")]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6 ")]
    fn blog_id_rejects_non_uuid_input(#[case] raw: &str) {
        assert_eq!(BlogId::new(raw), Err(BlogValidationError::InvalidId));
    }

    #[rstest]
    fn blog_id_field_name_is_id() {
        assert_eq!(BlogValidationError::InvalidId.field(), "id");
    }
}
