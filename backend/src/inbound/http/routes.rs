//! Route table for the HTTP adapter.
//!
//! ```text
//! /api/blogs, /api/blogs/{id}, /api/users, /api/login
//! /health/ready, /health/live
//! anything else -> 400 {"code":"invalid_request","message":"unknown endpoint"}
//! ```
//!
//! Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`.

use actix_web::web;

use crate::inbound::http::blogs::{create_blog, delete_blog, list_blogs, update_blog};
use crate::inbound::http::error::{json_error_handler, unknown_endpoint};
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::login::login;
use crate::inbound::http::users::{create_user, list_users};

/// Register every endpoint, the JSON error handler, and the unknown-endpoint
/// fallback.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::routes::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(list_blogs)
                .service(create_blog)
                .service(update_blog)
                .service(delete_blog)
                .service(list_users)
                .service(create_user)
                .service(login),
        )
        .service(ready)
        .service(live)
        .default_service(web::to(unknown_endpoint));
}
