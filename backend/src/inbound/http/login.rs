//! Login handler.
//!
//! ```text
//! POST /api/login {"username":"mluukkai","password":"salainen"}
//! ```

use actix_web::{post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::public::LoginResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Login request body for `POST /api/login`.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login name.
    #[schema(example = "mluukkai")]
    pub username: String,
    /// Plaintext password.
    #[schema(example = "salainen")]
    pub password: String,
}

/// Exchange a username and password for a bearer token.
///
/// Blank fields are rejected the same way as wrong credentials.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = LoginCredentials::try_from_parts(&payload.username, &payload.password)
        .map_err(|_| Error::invalid_credentials(INVALID_CREDENTIALS))?;
    let outcome = state.login.login(&credentials).await?;
    Ok(web::Json(outcome.into()))
}
