//! Shared application state for axum handlers.

use std::sync::Arc;

use kennywood_app::ports::ParkAreaRepository;
use kennywood_app::services::park_area_service::ParkAreaService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Park area CRUD service.
    pub park_area_service: Arc<ParkAreaService<R>>,
    /// Externally visible base URL used for resource links, if configured.
    pub public_url: Option<Arc<str>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            park_area_service: Arc::clone(&self.park_area_service),
            public_url: self.public_url.clone(),
        }
    }
}

impl<R> AppState<R>
where
    R: ParkAreaRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    ///
    /// Resource links are derived from each request's `Host` header.
    pub fn new(park_area_service: ParkAreaService<R>) -> Self {
        Self {
            park_area_service: Arc::new(park_area_service),
            public_url: None,
        }
    }

    /// Build resource links from a fixed base URL instead of the `Host` header.
    #[must_use]
    pub fn with_public_url(mut self, public_url: impl AsRef<str>) -> Self {
        let trimmed = public_url.as_ref().trim_end_matches('/');
        self.public_url = Some(Arc::from(trimmed));
        self
    }
}
