//! Park area — a themed section of the park (e.g. "Kiddieland").

use serde::{Deserialize, Serialize};

use crate::error::{FieldErrors, FieldIssue, KennywoodError, ValidationError};
use crate::id::ParkAreaId;

/// A persisted park area. The id is assigned by storage on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkArea {
    pub id: ParkAreaId,
    pub name: String,
    pub theme: String,
}

/// The caller-supplied fields of a park area, before it has an id.
///
/// Used both for creation and for whole-record updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkAreaDraft {
    pub name: String,
    pub theme: String,
}

impl ParkAreaDraft {
    /// Create a builder for constructing a [`ParkAreaDraft`].
    #[must_use]
    pub fn builder() -> ParkAreaDraftBuilder {
        ParkAreaDraftBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`KennywoodError::Validation`] listing every blank field.
    pub fn validate(&self) -> Result<(), KennywoodError> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert("name", FieldIssue::Blank);
        }
        if self.theme.trim().is_empty() {
            errors.insert("theme", FieldIssue::Blank);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields(errors).into())
        }
    }

    /// Attach a storage-assigned id.
    #[must_use]
    pub fn into_park_area(self, id: ParkAreaId) -> ParkArea {
        ParkArea {
            id,
            name: self.name,
            theme: self.theme,
        }
    }
}

/// Step-by-step builder for [`ParkAreaDraft`].
///
/// Unlike [`ParkAreaDraft::validate`], [`build`](Self::build) can tell a
/// field that was never supplied apart from one supplied blank.
#[derive(Debug, Default)]
pub struct ParkAreaDraftBuilder {
    name: Option<String>,
    theme: Option<String>,
}

impl ParkAreaDraftBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Consume the builder, validate, and return a [`ParkAreaDraft`].
    ///
    /// # Errors
    ///
    /// Returns [`KennywoodError::Validation`] naming every missing or blank
    /// field, not only the first one.
    pub fn build(self) -> Result<ParkAreaDraft, KennywoodError> {
        let mut errors = FieldErrors::default();
        let name = check("name", self.name, &mut errors);
        let theme = check("theme", self.theme, &mut errors);

        match (name, theme) {
            (Some(name), Some(theme)) if errors.is_empty() => Ok(ParkAreaDraft { name, theme }),
            _ => Err(ValidationError::Fields(errors).into()),
        }
    }
}

fn check(field: &'static str, value: Option<String>, errors: &mut FieldErrors) -> Option<String> {
    match value {
        None => {
            errors.insert(field, FieldIssue::Missing);
            None
        }
        Some(value) if value.trim().is_empty() => {
            errors.insert(field, FieldIssue::Blank);
            None
        }
        Some(value) => Some(value),
    }
}
