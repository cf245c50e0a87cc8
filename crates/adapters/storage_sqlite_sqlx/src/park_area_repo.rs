//! `SQLite` implementation of [`ParkAreaRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use kennywood_app::ports::ParkAreaRepository;
use kennywood_domain::error::{KennywoodError, NotFoundError};
use kennywood_domain::id::ParkAreaId;
use kennywood_domain::park_area::{ParkArea, ParkAreaDraft};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`ParkArea`].
struct Wrapper(ParkArea);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<ParkArea> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let theme: String = row.try_get("theme")?;

        Ok(Self(ParkArea {
            id: ParkAreaId::new(id),
            name,
            theme,
        }))
    }
}

const INSERT: &str = "INSERT INTO park_areas (name, theme) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, theme FROM park_areas WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, theme FROM park_areas ORDER BY id";
const UPDATE: &str = "UPDATE park_areas SET name = ?, theme = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM park_areas WHERE id = ?";

fn not_found(id: ParkAreaId) -> KennywoodError {
    NotFoundError {
        entity: "ParkArea",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed park area repository.
pub struct SqliteParkAreaRepository {
    pool: SqlitePool,
}

impl SqliteParkAreaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ParkAreaRepository for SqliteParkAreaRepository {
    fn create(
        &self,
        draft: ParkAreaDraft,
    ) -> impl Future<Output = Result<ParkArea, KennywoodError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&draft.name)
                .bind(&draft.theme)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(draft.into_park_area(ParkAreaId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: ParkAreaId,
    ) -> impl Future<Output = Result<Option<ParkArea>, KennywoodError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<ParkArea>, KennywoodError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        area: ParkArea,
    ) -> impl Future<Output = Result<ParkArea, KennywoodError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&area.name)
                .bind(&area.theme)
                .bind(area.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found(area.id));
            }
            Ok(area)
        }
    }

    fn delete(&self, id: ParkAreaId) -> impl Future<Output = Result<(), KennywoodError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found(id));
            }
            Ok(())
        }
    }
}
