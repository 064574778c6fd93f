//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::RegisterUserRequest;
use crate::domain::{LoginCredentials, User};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::routes::configure;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::InMemoryStore;
use crate::outbound::security::{BcryptPasswordHasher, JwtTokenService};

/// Signing secret shared by every test state.
pub const TEST_SECRET: &[u8] = b"test-secret";

/// State over a fresh in-memory store with the cheapest bcrypt cost.
pub fn test_state() -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    HttpState::new(HttpStatePorts {
        blogs: store.clone(),
        users: store,
        tokens: Arc::new(JwtTokenService::new(TEST_SECRET, 3600)),
        hasher: Arc::new(BcryptPasswordHasher::new(4)),
    })
}

/// Full route table wrapped in [`Trace`], as the server mounts it.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(HealthState::new()))
        .wrap(Trace)
        .configure(configure)
}

/// Register `username` with `password` directly through the domain.
pub async fn seed_user(state: &HttpState, username: &str, password: &str) -> User {
    state
        .users
        .register(RegisterUserRequest {
            username: Some(username.to_owned()),
            name: Some(format!("{username} tester")),
            password: Some(password.to_owned()),
        })
        .await
        .expect("seed user")
}

/// Log `username` in and return the issued token.
pub async fn token_for(state: &HttpState, username: &str, password: &str) -> String {
    let credentials = LoginCredentials::try_from_parts(username, password).expect("credentials");
    state.login.login(&credentials).await.expect("login").token
}
