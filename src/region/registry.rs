use crate::region::region_model::{RegionId, RegionRecord, RegionStatus};

// ============================================================================
// Region registry — discovery-ordered region records
// ============================================================================

/// Records of every region seen since the last full reset, in discovery order.
///
/// Holds at most one `Active` record per `RegionId`. Gone records are kept
/// as history until `clear()`.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    records: Vec<RegionRecord>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discovered region as Active.
    ///
    /// An id that is already Active keeps its row and takes the new path.
    /// Otherwise a fresh row is appended, leaving earlier Gone rows for the
    /// same id untouched.
    pub fn upsert_active(&mut self, id: RegionId, path: &str) {
        match self.records.iter_mut().find(|r| r.id == id && r.is_active()) {
            Some(record) => record.path = path.to_string(),
            None => self.records.push(RegionRecord::active(id, path)),
        }
    }

    /// Mark the Active record for `id` as Gone. Returns false when no Active
    /// record exists for it.
    pub fn mark_gone(&mut self, id: RegionId) -> bool {
        match self.records.iter_mut().find(|r| r.id == id && r.is_active()) {
            Some(record) => {
                record.status = RegionStatus::Gone;
                true
            }
            None => false,
        }
    }

    /// Mark every Active record as Gone. Returns how many changed.
    pub fn mark_all_gone(&mut self) -> usize {
        let mut changed = 0;
        for record in self.records.iter_mut().filter(|r| r.is_active()) {
            record.status = RegionStatus::Gone;
            changed += 1;
        }
        changed
    }

    /// Forget every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The Active record for `id`, if any.
    pub fn active(&self, id: RegionId) -> Option<&RegionRecord> {
        self.records.iter().find(|r| r.id == id && r.is_active())
    }

    /// Most recent record for `id`, Active or Gone.
    pub fn latest(&self, id: RegionId) -> Option<&RegionRecord> {
        self.records.iter().rev().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_active()).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
