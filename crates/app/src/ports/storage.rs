//! Storage port — repository traits for persistence.
//!
//! Implementations must report a missing record explicitly: `get_by_id`
//! returns `Ok(None)`, while `update` and `delete` return
//! [`KennywoodError::NotFound`]. Every other failure is
//! [`KennywoodError::Storage`].

use std::future::Future;

use kennywood_domain::error::KennywoodError;
use kennywood_domain::id::ParkAreaId;
use kennywood_domain::park_area::{ParkArea, ParkAreaDraft};

/// Persistence for [`ParkArea`] records.
pub trait ParkAreaRepository {
    /// Insert a new record; storage assigns the id.
    fn create(
        &self,
        draft: ParkAreaDraft,
    ) -> impl Future<Output = Result<ParkArea, KennywoodError>> + Send;

    fn get_by_id(
        &self,
        id: ParkAreaId,
    ) -> impl Future<Output = Result<Option<ParkArea>, KennywoodError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<ParkArea>, KennywoodError>> + Send;

    /// Overwrite `name` and `theme` of the record with `area.id`.
    fn update(
        &self,
        area: ParkArea,
    ) -> impl Future<Output = Result<ParkArea, KennywoodError>> + Send;

    fn delete(&self, id: ParkAreaId) -> impl Future<Output = Result<(), KennywoodError>> + Send;
}
