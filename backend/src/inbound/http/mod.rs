//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod blogs;
pub mod error;
pub mod health;
pub mod login;
pub mod public;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
