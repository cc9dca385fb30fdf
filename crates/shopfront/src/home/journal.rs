//! Bounded journal of dispatched actions, for debugging the panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use utoipa::ToSchema;
use uuid::Uuid;

use super::state::HomeAction;

/// Default number of records the journal retains.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 64;

/// One dispatched action, with the revision it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRecord {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    pub revision: u64,
    pub action: HomeAction,
}

/// FIFO journal of the most recent dispatches. Oldest records are
/// evicted once capacity is reached.
#[derive(Debug)]
pub struct DispatchJournal {
    records: VecDeque<DispatchRecord>,
    capacity: usize,
}

impl DispatchJournal {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a dispatch, evicting the oldest entry when full.
    pub fn record(&mut self, revision: u64, action: HomeAction) -> DispatchRecord {
        let record = DispatchRecord {
            id: Uuid::now_v7(),
            at: Utc::now(),
            revision,
            action,
        };
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record.clone());
        record
    }

    /// Returns retained records, oldest first.
    pub fn records(&self) -> Vec<DispatchRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DispatchJournal {
    fn default() -> Self {
        Self::new(DEFAULT_JOURNAL_CAPACITY)
    }
}
