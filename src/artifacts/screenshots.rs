//! Screenshot retrieval capability.
//!
//! Filmstrip frames live with the instrumentation layer and may not be
//! materialized yet when asset preparation starts, so retrieval is an
//! async capability the preparer awaits rather than a plain field.

use crate::artifacts::schema::Filmstrip;
use crate::utils::error::AssetError;
use async_trait::async_trait;

/// Source of the screenshot filmstrip for a gathering run
///
/// Implementations may fetch lazily (e.g. from a live instrumentation
/// session); failures surface as [`AssetError::ScreenshotFetch`].
#[async_trait]
pub trait ScreenshotSource: Send + Sync {
    /// Retrieve the time-ordered filmstrip
    async fn request_screenshots(&self) -> Result<Filmstrip, AssetError>;
}

/// Screenshot source backed by an already-materialized filmstrip
///
/// Used when frames were captured eagerly during gathering, and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticScreenshots {
    filmstrip: Filmstrip,
}

impl StaticScreenshots {
    pub fn new(filmstrip: Filmstrip) -> Self {
        Self { filmstrip }
    }
}

#[async_trait]
impl ScreenshotSource for StaticScreenshots {
    async fn request_screenshots(&self) -> Result<Filmstrip, AssetError> {
        Ok(self.filmstrip.clone())
    }
}
