//! Park area service — use-cases for managing park areas.

use kennywood_domain::error::{KennywoodError, NotFoundError};
use kennywood_domain::id::ParkAreaId;
use kennywood_domain::park_area::{ParkArea, ParkAreaDraft};

use crate::ports::ParkAreaRepository;

/// Application service for park area CRUD operations.
pub struct ParkAreaService<R> {
    repo: R,
}

impl<R: ParkAreaRepository> ParkAreaService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new park area after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`KennywoodError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(park_area_name = %draft.name))]
    pub async fn create_park_area(&self, draft: ParkAreaDraft) -> Result<ParkArea, KennywoodError> {
        draft.validate()?;
        let created = self.repo.create(draft).await?;
        tracing::debug!(id = %created.id, "park area created");
        Ok(created)
    }

    /// Look up a park area by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`KennywoodError::NotFound`] when no park area with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_park_area(&self, id: ParkAreaId) -> Result<ParkArea, KennywoodError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all park areas.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_park_areas(&self) -> Result<Vec<ParkArea>, KennywoodError> {
        self.repo.get_all().await
    }

    /// Overwrite the name and theme of an existing park area.
    ///
    /// # Errors
    ///
    /// Returns [`KennywoodError::Validation`] if invariants fail,
    /// [`KennywoodError::NotFound`] when `id` does not exist, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_park_area(
        &self,
        id: ParkAreaId,
        draft: ParkAreaDraft,
    ) -> Result<ParkArea, KennywoodError> {
        draft.validate()?;
        self.repo.update(draft.into_park_area(id)).await
    }

    /// Delete a park area by id.
    ///
    /// # Errors
    ///
    /// Returns [`KennywoodError::NotFound`] when `id` does not exist, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_park_area(&self, id: ParkAreaId) -> Result<(), KennywoodError> {
        self.repo.delete(id).await
    }
}

fn not_found(id: ParkAreaId) -> KennywoodError {
    NotFoundError {
        entity: "ParkArea",
        id: id.to_string(),
    }
    .into()
}
