//! Database model types for Diesel ORM.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::clusters;
use crate::domain::{Cluster, ClusterId, ClusterUpdate};
use crate::error::{Error, Result};

/// Database row for a cluster.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = clusters)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClusterRow {
    pub seq: i64,
    pub id: String,
    pub name: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ClusterRow {
    /// Convert into the domain type, parsing the stored RFC 3339 timestamps.
    pub fn into_cluster(self) -> Result<Cluster> {
        Ok(Cluster {
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            id: ClusterId::from(self.id),
            name: self.name,
            status: self.status,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("invalid timestamp '{value}': {e}")))
}

/// Database row for a new cluster (insertable).
///
/// `seq` and both timestamps are filled in by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = clusters)]
pub struct NewClusterRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub status: &'a str,
}

/// Partial update for a cluster row. `None` fields are left out of the
/// `SET` clause and keep their stored value.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = clusters)]
pub struct ClusterChangeset<'a> {
    pub name: Option<&'a str>,
    pub status: Option<&'a str>,
}

impl<'a> From<&'a ClusterUpdate> for ClusterChangeset<'a> {
    fn from(update: &'a ClusterUpdate) -> Self {
        Self {
            name: update.name.as_deref(),
            status: update.status.as_deref(),
        }
    }
}
