//! OpenAPI document for the REST API.
//!
//! Registers every handler path, the request and response bodies from
//! `inbound::http`, the error schemas, and the bearer security scheme. Served
//! by Swagger UI in debug builds and printed by the `openapi-dump` binary.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::blogs::{CreateBlogBody, UpdateLikesBody};
use crate::inbound::http::login::LoginRequest;
use crate::inbound::http::public::{
    LoginResponse, PublicBlog, PublicBlogSummary, PublicBlogWithOwner, PublicOwner, PublicUser,
    PublicUserWithBlogs,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::CreateUserBody;

/// Name under which handlers reference the bearer scheme.
pub const BEARER_SCHEME: &str = "bearer";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token returned by POST /api/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bloglist API",
        description = "Blogs, their owners, and bearer-token authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::update_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::login::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateBlogBody,
        UpdateLikesBody,
        CreateUserBody,
        LoginRequest,
        LoginResponse,
        PublicBlog,
        PublicOwner,
        PublicBlogWithOwner,
        PublicUser,
        PublicBlogSummary,
        PublicUserWithBlogs,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "blogs", description = "Blog listing and ownership-gated mutation"),
        (name = "users", description = "Registration, listing, and login"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    fn document() -> Value {
        serde_json::to_value(ApiDoc::openapi()).expect("document serialises")
    }

    #[rstest]
    #[case("/api/blogs")]
    #[case("/api/blogs/{id}")]
    #[case("/api/users")]
    #[case("/api/login")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn registers_path(#[case] path: &str) {
        assert!(document()["paths"].get(path).is_some(), "missing {path}");
    }

    #[test]
    fn bearer_scheme_is_http_bearer() {
        let doc = document();
        let scheme = &doc["components"]["securitySchemes"][BEARER_SCHEME];
        assert_eq!(scheme["type"], "http");
        assert_eq!(scheme["scheme"], "bearer");
    }

    #[test]
    fn create_and_delete_require_the_bearer_scheme() {
        let doc = document();
        for (path, method) in [("/api/blogs", "post"), ("/api/blogs/{id}", "delete")] {
            let security = &doc["paths"][path][method]["security"];
            assert!(
                security.to_string().contains(BEARER_SCHEME),
                "{method} {path} lacks bearer security"
            );
        }
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = document();
        let schemas = doc["components"]["schemas"]
            .as_object()
            .expect("schemas object");
        assert!(schemas.keys().any(|name| name.ends_with("Error")));
    }

    #[rstest]
    #[case("/api/blogs", "post", "401")]
    #[case("/api/blogs", "post", "400")]
    #[case("/api/blogs/{id}", "put", "400")]
    #[case("/api/blogs/{id}", "delete", "403")]
    #[case("/api/users", "post", "400")]
    #[case("/api/login", "post", "401")]
    fn error_responses_reference_the_error_schema(
        #[case] path: &str,
        #[case] method: &str,
        #[case] status: &str,
    ) {
        let doc = document();
        let reference = doc["paths"][path][method]["responses"][status]["content"]
            ["application/json"]["schema"]["$ref"]
            .as_str()
            .expect("error response references a schema");
        let name = reference
            .strip_prefix("#/components/schemas/")
            .expect("local component reference");

        assert!(name.ends_with("Error"), "{reference}");
        assert!(
            doc["components"]["schemas"].get(name).is_some(),
            "{name} is not registered"
        );
    }
}
