//! Aggregate category index models.
//!
//! The index is a single JSON document summarizing every stored record. It
//! is loaded fully on each read and rewritten in full on each write; there
//! is no incremental update path.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::categories::PrimaryCategory;

pub const INDEX_VERSION: u32 = 1;

/// Lightweight reference to one stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    pub primary_category: PrimaryCategory,
    #[serde(default)]
    pub secondary_category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-primary-category counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub count: u64,
    #[serde(default)]
    pub subcategory_counts: BTreeMap<String, u64>,
}

/// The full index document.
///
/// Invariants: `total_count` equals `entries.len()`; each bucket's `count`
/// equals the number of entries under that primary category; a bucket's
/// subcategory counts sum to at most its `count` (entries may carry no
/// secondary category). `entries` preserves write order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryIndex {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_count: u64,
    pub by_category: BTreeMap<PrimaryCategory, CategoryBucket>,
    pub entries: Vec<IndexEntry>,
}

impl CategoryIndex {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            version: INDEX_VERSION,
            created_at: now,
            updated_at: now,
            total_count: 0,
            by_category: BTreeMap::new(),
            entries: Vec::new(),
        }
    }

    /// Append a reference entry and bump the matching counters.
    pub fn push_entry(&mut self, entry: IndexEntry, now: DateTime<Utc>) {
        let bucket = self.by_category.entry(entry.primary_category).or_default();
        bucket.count += 1;
        if let Some(secondary) = &entry.secondary_category {
            *bucket.subcategory_counts.entry(secondary.clone()).or_insert(0) += 1;
        }
        self.total_count += 1;
        self.updated_at = now;
        self.entries.push(entry);
    }
}

/// Read-only statistics view over the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStatistics {
    pub total_count: u64,
    pub updated_at: DateTime<Utc>,
    pub by_category: BTreeMap<PrimaryCategory, CategoryBucket>,
}
