//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`BlogRepository`, `UserRepository`, `TokenService`,
//! `PasswordHasher`) describe what the domain needs from infrastructure and
//! expose strongly typed errors so adapters map their failures into
//! predictable variants. Driving ports (`BlogsCommand`, `BlogsQuery`,
//! `UsersCommand`, `UsersQuery`, `LoginService`) are what inbound adapters
//! call.

mod macros;
pub(crate) use macros::define_port_error;

mod blog_repository;
mod blogs_command;
mod blogs_query;
mod login_service;
mod password_hasher;
mod token_service;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogPersistenceError, BlogRepository};
pub use blogs_command::{BlogsCommand, CreateBlogRequest};
pub use blogs_query::BlogsQuery;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{TokenError, TokenService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::{RegisterUserRequest, UsersCommand};
pub use users_query::UsersQuery;
