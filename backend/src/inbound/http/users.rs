//! Users API handlers.
//!
//! ```text
//! GET  /api/users
//! POST /api/users {"username":"root","name":"Superuser","password":"sekret"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::ports::RegisterUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::public::{PublicUser, PublicUserWithBlogs};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/users`.
#[derive(Deserialize, ToSchema)]
pub struct CreateUserBody {
    /// Login name, at least three characters.
    #[schema(example = "root")]
    pub username: Option<String>,
    /// Optional display name.
    #[schema(example = "Superuser")]
    pub name: Option<String>,
    /// Plaintext password, at least three characters.
    #[schema(example = "sekret")]
    pub password: Option<String>,
}

impl From<CreateUserBody> for RegisterUserRequest {
    fn from(body: CreateUserBody) -> Self {
        Self {
            username: body.username,
            name: body.name,
            password: body.password,
        }
    }
}

/// List users with the blogs they own.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [PublicUserWithBlogs]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PublicUserWithBlogs>>> {
    let users = state.users_query.list().await?;
    Ok(web::Json(users.iter().map(PublicUserWithBlogs::from).collect()))
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User created", body = PublicUser),
        (
            status = 400,
            description = "Short password or username, or username taken",
            body = ErrorSchema
        )
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<HttpResponse> {
    let user = state.users.register(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(PublicUser::from(&user)))
}
