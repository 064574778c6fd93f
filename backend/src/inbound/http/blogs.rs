//! Blog API handlers.
//!
//! ```text
//! GET    /api/blogs
//! POST   /api/blogs      {"title":"..","author":"..","url":"..","likes":0}
//! PUT    /api/blogs/{id} {"likes":5}
//! DELETE /api/blogs/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::ports::CreateBlogRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Bearer;
use crate::inbound::http::public::{PublicBlog, PublicBlogWithOwner};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/blogs`.
///
/// Every field is optional at the JSON level so validation errors come from
/// the domain after the token has been checked. The body is decoded by the
/// handler itself so an undecodable body from an anonymous caller is still
/// answered with `401`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlogBody {
    /// Title; required.
    #[schema(example = "Canonical string reduction")]
    pub title: Option<String>,
    /// Author; required.
    #[schema(example = "Edsger W. Dijkstra")]
    pub author: Option<String>,
    /// Link; required.
    #[schema(example = "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html")]
    pub url: Option<String>,
    /// Initial likes; defaults to zero.
    pub likes: Option<u64>,
}

impl From<CreateBlogBody> for CreateBlogRequest {
    fn from(body: CreateBlogBody) -> Self {
        Self {
            title: body.title,
            author: body.author,
            url: body.url,
            likes: body.likes,
        }
    }
}

/// Request body for `PUT /api/blogs/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLikesBody {
    /// New like count.
    pub likes: u64,
}

/// List every blog with its owner expanded.
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Blogs", body = [PublicBlogWithOwner]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_blogs(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PublicBlogWithOwner>>> {
    let blogs = state.blogs_query.list().await?;
    Ok(web::Json(blogs.iter().map(PublicBlogWithOwner::from).collect()))
}

/// Create a blog owned by the bearer of the token.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogBody,
    responses(
        (status = 201, description = "Blog created", body = PublicBlog),
        (
            status = 400,
            description = "Missing title, author or url, likes out of range, or malformed body",
            body = ErrorSchema
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "createBlog",
    security(("bearer" = []))
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    bearer: Bearer,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let token = bearer.into_inner();
    let payload = match serde_json::from_slice::<CreateBlogBody>(&body) {
        Ok(payload) => payload,
        Err(err) => {
            state.blogs.authenticate(token).await?;
            return Err(Error::invalid_request(format!("malformed JSON body: {err}"))
                .with_details(json!({ "code": "malformed_json" })));
        }
    };
    let blog = state.blogs.create(token, payload.into()).await?;
    Ok(HttpResponse::Created().json(PublicBlog::from(&blog)))
}

/// Replace a blog's like count. No token is required.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    request_body = UpdateLikesBody,
    responses(
        (status = 200, description = "Blog updated", body = PublicBlog),
        (
            status = 400,
            description = "Malformed or unknown id, or invalid body",
            body = ErrorSchema
        )
    ),
    tags = ["blogs"],
    operation_id = "updateBlogLikes",
    security([])
)]
#[put("/blogs/{id}")]
pub async fn update_blog(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<UpdateLikesBody>,
) -> ApiResult<web::Json<PublicBlog>> {
    let blog = state
        .blogs
        .update_likes(id.as_str(), payload.likes)
        .await?;
    Ok(web::Json(PublicBlog::from(&blog)))
}

/// Delete a blog. Only its creator may do so.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 403, description = "Caller does not own the blog", body = ErrorSchema),
        (status = 404, description = "No blog with this id", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog",
    security(("bearer" = []))
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    bearer: Bearer,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.blogs.delete(bearer.into_inner(), id.as_str()).await?;
    Ok(HttpResponse::NoContent().finish())
}
