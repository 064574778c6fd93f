//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BlogRepository, BlogsCommand, BlogsQuery, LoginService, PasswordHasher, TokenService,
    UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{AuthService, BlogService, UserService};

/// Parameter object bundling the driven ports the services are built from.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Blog storage.
    pub blogs: Arc<dyn BlogRepository>,
    /// User storage.
    pub users: Arc<dyn UserRepository>,
    /// Bearer token signer.
    pub tokens: Arc<dyn TokenService>,
    /// Password hasher.
    pub hasher: Arc<dyn PasswordHasher>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Blog mutations.
    pub blogs: Arc<dyn BlogsCommand>,
    /// Blog listing.
    pub blogs_query: Arc<dyn BlogsQuery>,
    /// Registration.
    pub users: Arc<dyn UsersCommand>,
    /// User listing.
    pub users_query: Arc<dyn UsersQuery>,
    /// Credential check.
    pub login: Arc<dyn LoginService>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Wire the domain services over a set of driven ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bloglist::inbound::http::state::{HttpState, HttpStatePorts};
    /// use bloglist::outbound::memory::InMemoryStore;
    /// use bloglist::outbound::security::{BcryptPasswordHasher, JwtTokenService};
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let state = HttpState::new(HttpStatePorts {
    ///     blogs: store.clone(),
    ///     users: store,
    ///     tokens: Arc::new(JwtTokenService::new(b"doc-secret", 3600)),
    ///     hasher: Arc::new(BcryptPasswordHasher::new(4)),
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            blogs,
            users,
            tokens,
            hasher,
        } = ports;
        let blog_service = Arc::new(BlogService::new(blogs, users.clone(), tokens.clone()));
        let user_service = Arc::new(UserService::new(users.clone(), hasher.clone()));
        let auth_service = Arc::new(AuthService::new(users, hasher, tokens));
        Self {
            blogs: blog_service.clone(),
            blogs_query: blog_service,
            users: user_service.clone(),
            users_query: user_service,
            login: auth_service,
        }
    }
}
