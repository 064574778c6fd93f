//! Bearer token extraction from the `Authorization` header.
//!
//! The extractor never rejects a request: a missing or non-bearer header
//! yields `None` and the domain decides whether a token was required.

use std::future::{Ready, ready};

use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::domain::BearerToken;

const SCHEME: &str = "bearer ";

/// Optional bearer token presented with a request.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bloglist::inbound::http::auth::Bearer;
///
/// async fn handler(bearer: Bearer) -> HttpResponse {
///     if bearer.into_inner().is_some() {
///         HttpResponse::Ok().finish()
///     } else {
///         HttpResponse::Unauthorized().finish()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Bearer(Option<BearerToken>);

impl Bearer {
    /// Token text, if a bearer credential was supplied.
    pub fn into_inner(self) -> Option<BearerToken> {
        self.0
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively. Non-UTF-8 values and other
/// schemes are treated as absent.
pub fn bearer_from_headers(headers: &HeaderMap) -> Option<BearerToken> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let scheme = value.get(..SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }
    value.get(SCHEME.len()..).map(BearerToken::new)
}

impl FromRequest for Bearer {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self(bearer_from_headers(req.headers()))))
    }
}
