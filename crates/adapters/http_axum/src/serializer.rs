//! Hyperlinked JSON representations of domain records.

use serde::Serialize;

use kennywood_domain::id::ParkAreaId;
use kennywood_domain::park_area::ParkArea;

use crate::extract::BaseUrl;

/// Wire shape of a park area: `{id, url, name, theme}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkAreaRepresentation {
    pub id: ParkAreaId,
    pub url: String,
    pub name: String,
    pub theme: String,
}

/// Turns [`ParkArea`] records into [`ParkAreaRepresentation`]s whose `url`
/// points at the retrieve endpoint, relative to the request's base address.
pub struct ParkAreaSerializer<'a> {
    base: &'a BaseUrl,
}

impl<'a> ParkAreaSerializer<'a> {
    #[must_use]
    pub fn new(base: &'a BaseUrl) -> Self {
        Self { base }
    }

    /// Link to the retrieve endpoint for `id`.
    #[must_use]
    pub fn url_for(&self, id: ParkAreaId) -> String {
        format!("{}/parkareas/{id}", self.base.as_str())
    }

    #[must_use]
    pub fn one(&self, area: ParkArea) -> ParkAreaRepresentation {
        ParkAreaRepresentation {
            url: self.url_for(area.id),
            id: area.id,
            name: area.name,
            theme: area.theme,
        }
    }

    /// Serialize a collection, keeping its order.
    #[must_use]
    pub fn many(&self, areas: Vec<ParkArea>) -> Vec<ParkAreaRepresentation> {
        areas.into_iter().map(|area| self.one(area)).collect()
    }
}
