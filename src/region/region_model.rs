use std::fmt;

use serde::{Deserialize, Serialize};

/// Page-scoped identifier the inspected page assigns to a live region.
///
/// Unique within one page lifetime only; a navigation may hand out the same
/// number again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u64);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionStatus {
    Active,
    Gone,
}

/// What the panel knows about one discovered region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub id: RegionId,

    /// CSS selector path to the region's node, only used for "inspect element".
    pub path: String,

    pub status: RegionStatus,
}

impl RegionRecord {
    pub fn active(id: RegionId, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            status: RegionStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RegionStatus::Active
    }
}
