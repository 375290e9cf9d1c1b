//! The cluster resource.
//!
//! A [`Cluster`] is the only entity the backend manages. Clusters are created
//! in the [`PROVISIONING`](status::PROVISIONING) state, may be renamed or
//! re-tagged through partial updates, and are archived rather than deleted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::ClusterId;

/// Well-known status tags.
///
/// Status is free-form; these are the values the store itself assigns.
pub mod status {
    /// Status assigned at creation.
    pub const PROVISIONING: &str = "provisioning";
    /// Status assigned by archive.
    pub const ARCHIVED: &str = "archived";
}

/// A stored cluster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    /// Store-assigned identifier, immutable once set.
    pub id: ClusterId,
    /// Display name, never empty.
    pub name: String,
    /// Free-form status tag, never empty.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Cluster {
    /// Build a freshly provisioned cluster with a generated ID.
    pub fn provision(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ClusterId::generate(),
            name: name.into(),
            status: status::PROVISIONING.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True when the cluster carries the archived status.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.status == status::ARCHIVED
    }

    /// Apply a partial update in place. Fields left as `None` are untouched.
    pub fn apply(&mut self, update: &ClusterUpdate) {
        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(status) = &update.status {
            self.status.clone_from(status);
        }
    }
}

/// Partial update for a cluster.
///
/// Each field is optional: `None` means "leave the stored value unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterUpdate {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl ClusterUpdate {
    /// Update that renames the cluster.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: None,
        }
    }

    /// Update that sets the status tag.
    pub fn set_status(status: impl Into<String>) -> Self {
        Self {
            name: None,
            status: Some(status.into()),
        }
    }

    /// True when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none()
    }
}
