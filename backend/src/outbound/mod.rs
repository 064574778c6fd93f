//! Outbound adapters implementing the domain ports.
//!
//! - **memory**: process-local store for development and tests
//! - **persistence**: PostgreSQL via Diesel
//! - **security**: JWT tokens and bcrypt password hashes

pub mod memory;
pub mod persistence;
pub mod security;
