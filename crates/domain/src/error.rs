//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts them into
//! [`KennywoodError`] via `#[from]`, so the HTTP adapter can map every
//! failure to a status code in one place.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum KennywoodError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Any persistence failure other than a missing record.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The requested record does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Input rejected before it reached storage.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields are missing or invalid.
    #[error("invalid fields: {0}")]
    Fields(FieldErrors),

    /// The payload could not be decoded at all.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// What is wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    Blank,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("This field is required."),
            Self::Blank => f.write_str("This field may not be blank."),
        }
    }
}

impl Serialize for FieldIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Field name → issue, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, FieldIssue>);

impl FieldErrors {
    /// Record an issue for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: &'static str, issue: FieldIssue) {
        self.0.insert(field, issue);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<FieldIssue> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, issue) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {issue}")?;
            first = false;
        }
        Ok(())
    }
}
