//! Subjects
//!
//! Read-only catalog references held by grid cells. Display colors are
//! assigned at the catalog boundary; the engine only fabricates the
//! neutral placeholder used when a persisted subject id is missing from
//! the current catalog.

/// Neutral color for subjects that no longer resolve against the catalog.
pub(crate) const PLACEHOLDER_COLOR: &str = "#e0e0e0";

/// Display name used when a stale persisted row carries no subject name.
pub(crate) const PLACEHOLDER_NAME: &str = "Subject";

/// A catalog subject as the grid sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    /// CSS hex color used to tint cells and sidebar cards.
    pub color: String,
}

impl Subject {
    pub fn new(id: i64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Stand-in for a persisted subject the catalog no longer knows.
    pub(crate) fn placeholder(id: i64, name: Option<String>) -> Self {
        Self {
            id,
            name: name.unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            color: PLACEHOLDER_COLOR.to_string(),
        }
    }
}
