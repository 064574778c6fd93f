//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or the body is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// An identifier is malformed or does not resolve.
    #[schema(rename = "invalid_id")]
    InvalidId,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The bearer token is missing or invalid.
    #[schema(rename = "invalid_token")]
    InvalidToken,
    /// Username or password is wrong.
    #[schema(rename = "invalid_credentials")]
    InvalidCredentials,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The username is already taken.
    #[schema(rename = "duplicate_username")]
    DuplicateUsername,
    /// Password or username is too short.
    #[schema(rename = "weak_credential")]
    WeakCredential,
    /// A backing service is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_token")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "token missing or invalid")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn error_schema_describes_code_and_message() {
        let schema = serde_json::to_value(ErrorSchema::schema()).expect("schema serialises");
        let properties = schema
            .get("properties")
            .and_then(serde_json::Value::as_object)
            .expect("object schema");
        assert!(properties.contains_key("code"));
        assert!(properties.contains_key("message"));
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let rendered = serde_json::to_string(&ErrorCodeSchema::schema()).expect("serialise");
        for code in [
            "invalid_request",
            "invalid_id",
            "not_found",
            "invalid_token",
            "invalid_credentials",
            "forbidden",
            "duplicate_username",
            "weak_credential",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(rendered.contains(code), "missing {code}");
        }
    }
}
