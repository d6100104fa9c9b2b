//! Catalog collaborator surface.
//!
//! The navigator never talks to the GraphQL transport itself; it consumes a
//! materialized course tree and emits like/refetch requests through this
//! trait, injected at construction time so there is no globally shared
//! bridge between the sidebar and the player page.

use async_trait::async_trait;
use lectern_model::{Course, CourseId};

use crate::error::CatalogError;

/// External data layer: course fetches and fire-and-forget side effects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    /// Fetch (or refetch) the course tree. Refetching after a side effect
    /// must not disturb an in-progress navigation session unless the course
    /// identity itself changed.
    async fn fetch_course(&self, id: &CourseId) -> Result<Course, CatalogError>;

    /// Record a "like" for the course. The navigator does not depend on the
    /// result beyond optionally refreshing counts afterwards.
    async fn submit_like(&self, id: &CourseId) -> Result<(), CatalogError>;
}
