//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, the pure aggregations over blogs, and the services
//! that enforce authentication and ownership. Nothing here knows about HTTP
//! or SQL; adapters reach the domain through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable error identifier.
//! - Blog, User and their read models (`BlogWithOwner`, `UserWithBlogs`).
//! - `blog_stats`: total likes, favourite blog, most blogs, most likes.
//! - BlogService, UserService, AuthService: driving port implementations.

pub mod auth;
mod auth_service;
pub mod blog;
mod blog_service;
pub mod blog_stats;
pub mod error;
pub mod ports;
mod service_support;
mod trace_id;
pub mod user;
mod user_service;

pub use self::auth::{
    BearerToken, LoginCredentials, LoginOutcome, LoginValidationError, PASSWORD_MIN,
    Registration, RegistrationError,
};
pub use self::auth_service::AuthService;
pub use self::blog::{
    Blog, BlogDraft, BlogId, BlogSummary, BlogValidationError, BlogWithOwner, LIKES_MAX,
    OwnerSummary,
};
pub use self::blog_service::BlogService;
pub use self::blog_stats::{AuthorBlogCount, AuthorLikes};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{
    PasswordHash, USERNAME_MIN, User, UserId, UserValidationError, UserWithBlogs, Username,
};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bloglist::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
