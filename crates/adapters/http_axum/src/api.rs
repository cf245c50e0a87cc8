//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod park_areas;

use axum::Router;
use axum::routing::get;

use kennywood_app::ports::ParkAreaRepository;

use crate::state::AppState;

/// Build the resource sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ParkAreaRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/parkareas",
            get(park_areas::list::<R>).post(park_areas::create::<R>),
        )
        .route(
            "/parkareas/{id}",
            get(park_areas::retrieve::<R>)
                .put(park_areas::update::<R>)
                .delete(park_areas::delete::<R>),
        )
}
