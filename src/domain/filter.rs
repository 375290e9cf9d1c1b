//! List filtering and pagination for clusters.
//!
//! [`ClusterFilter`] carries the predicates and page window for a list call.
//! Both store implementations evaluate it with the same semantics:
//!
//! - `status` is an exact match, `name_prefix` and `id_prefix` are byte-wise,
//!   case-sensitive prefix matches
//! - an absent or empty predicate places no constraint
//! - matches are ordered by name ascending, ties in insertion order
//! - `total` counts every match, the page is `[offset, offset + limit)`

use std::ops::Range;

use super::cluster::Cluster;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: usize = 200;

/// Predicates and page window for listing clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterFilter {
    status: Option<String>,
    name_prefix: Option<String>,
    id_prefix: Option<String>,
    limit: usize,
    offset: usize,
}

impl Default for ClusterFilter {
    fn default() -> Self {
        Self::page(DEFAULT_PAGE_LIMIT, 0)
    }
}

impl ClusterFilter {
    /// Unconstrained filter returning the window `[offset, offset + limit)`.
    #[must_use]
    pub const fn page(limit: usize, offset: usize) -> Self {
        Self {
            status: None,
            name_prefix: None,
            id_prefix: None,
            limit,
            offset,
        }
    }

    /// Unconstrained filter with the limit clamped to `[1, MAX_PAGE_LIMIT]`
    /// and negative offsets raised to zero.
    #[must_use]
    pub fn clamped(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = limit.map_or(DEFAULT_PAGE_LIMIT, |raw| {
            usize::try_from(raw.clamp(1, MAX_PAGE_LIMIT as i64)).unwrap_or(DEFAULT_PAGE_LIMIT)
        });
        let offset = offset.map_or(0, |raw| usize::try_from(raw.max(0)).unwrap_or(usize::MAX));
        Self::page(limit, offset)
    }

    /// Restrict to clusters whose status equals `status`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = non_empty(status.into());
        self
    }

    /// Restrict to clusters whose name starts with `prefix`.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = non_empty(prefix.into());
        self
    }

    /// Restrict to clusters whose ID starts with `prefix`.
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = non_empty(prefix.into());
        self
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn name_prefix(&self) -> Option<&str> {
        self.name_prefix.as_deref()
    }

    #[must_use]
    pub fn id_prefix(&self) -> Option<&str> {
        self.id_prefix.as_deref()
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// True when `cluster` satisfies every present predicate.
    #[must_use]
    pub fn matches(&self, cluster: &Cluster) -> bool {
        self.status().map_or(true, |s| cluster.status == s)
            && self
                .name_prefix()
                .map_or(true, |p| cluster.name.starts_with(p))
            && self
                .id_prefix()
                .map_or(true, |p| cluster.id.as_str().starts_with(p))
    }

    /// Index range of the page within `total` ordered matches.
    ///
    /// Empty when `offset >= total`.
    #[must_use]
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        let end = start.saturating_add(self.limit).min(total);
        start..end
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// One page of list results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterPage {
    /// Clusters inside the requested window, ordered by name.
    pub items: Vec<Cluster>,
    /// Number of matches before pagination.
    pub total: usize,
}
