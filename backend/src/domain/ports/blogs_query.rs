//! Driving port for blog reads.

use async_trait::async_trait;

use crate::domain::{BlogWithOwner, Error};

/// Domain use-case port for listing blogs.
#[async_trait]
pub trait BlogsQuery: Send + Sync {
    /// Every blog with its owner expanded.
    async fn list(&self) -> Result<Vec<BlogWithOwner>, Error>;
}
