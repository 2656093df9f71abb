//! Storage backend contract.
//!
//! The lifecycle service needs only per-id atomicity from a backend: each
//! method is a single atomic operation against one record, and the two CAS
//! methods condition on the record's current `reads` value. That is enough to
//! make the read-count/deletion race safe without cross-paste coordination,
//! and it maps onto a conditional UPDATE/DELETE in any transactional or
//! versioned key-value backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::PasteRecord;

#[async_trait]
pub trait PasteStore: Send + Sync {
    /// Insert a freshly created record. Ids are never reused, so a
    /// collision is a storage error, not an overwrite.
    async fn insert(&self, record: PasteRecord) -> Result<()>;

    /// Fetch a record by id.
    async fn get(&self, id: &str) -> Result<Option<PasteRecord>>;

    /// CAS: set `reads = new_reads` iff the stored value still equals
    /// `expected_reads`. Returns false on conflict or absence.
    async fn update_reads(&self, id: &str, expected_reads: u32, new_reads: u32) -> Result<bool>;

    /// CAS delete: remove the record iff its `reads` still equals
    /// `expected_reads`. Returns false on conflict or absence. This is the
    /// commit point for burn-after-read and read-limit consumption.
    async fn remove_if_reads(&self, id: &str, expected_reads: u32) -> Result<bool>;

    /// Unconditional remove (expiry purge, token-authorized delete).
    /// Returns true if a record was present.
    async fn remove(&self, id: &str) -> Result<bool>;

    /// Remove every record whose `expires_at` has passed. Returns the number
    /// purged. Reads already purge lazily; this keeps unread expired pastes
    /// from accumulating.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize>;
}
