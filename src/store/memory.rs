//! In-memory paste store.
//!
//! Interior mutability via `parking_lot::Mutex` (Send + Sync on all targets).
//! Every trait method takes the lock exactly once, so each operation is
//! atomic with respect to every other — which satisfies the per-id atomicity
//! the trait contract requires.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::error::{PasteError, Result};
use crate::store::traits::PasteStore;
use crate::types::PasteRecord;

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, PasteRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl PasteStore for MemoryStore {
    async fn insert(&self, record: PasteRecord) -> Result<()> {
        let mut records = self.records.lock();
        match records.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(PasteError::Storage(format!(
                "duplicate paste id: {}",
                record.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<PasteRecord>> {
        Ok(self.records.lock().get(id).cloned())
    }

    async fn update_reads(&self, id: &str, expected_reads: u32, new_reads: u32) -> Result<bool> {
        let mut records = self.records.lock();
        match records.get_mut(id) {
            Some(record) if record.reads == expected_reads => {
                record.reads = new_reads;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn remove_if_reads(&self, id: &str, expected_reads: u32) -> Result<bool> {
        let mut records = self.records.lock();
        match records.get(id) {
            Some(record) if record.reads == expected_reads => {
                records.remove(id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        Ok(self.records.lock().remove(id).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize> {
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|_, record| record.expires_at.map_or(true, |at| at >= now));
        Ok(before - records.len())
    }
}
