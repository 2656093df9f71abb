//! Paste lifecycle: create, read-with-consumption, token-authorized delete.
//!
//! The read path is the one place correctness is subtle: the count check and
//! the delete/update commit must be atomic per paste, or two concurrent reads
//! of a `max_reads = 1` paste could both be served. The service re-reads and
//! re-evaluates whenever a store CAS reports a conflict; the winning CAS
//! either advanced `reads` or removed the record, so re-evaluation only ever
//! moves toward "gone", never toward over-serving.

pub mod policy;
pub mod sweeper;

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use ashbin_crypto::{hash_delete_token, verify_delete_token};

use crate::error::{PasteError, Result};
use crate::lifecycle::policy::ReadDisposition;
use crate::store::traits::PasteStore;
use crate::types::{CreatePaste, CreatedPaste, PasteRecord, PasteSnapshot};

pub struct PasteService {
    store: Arc<dyn PasteStore>,
}

impl PasteService {
    pub fn new(store: Arc<dyn PasteStore>) -> Self {
        Self { store }
    }

    /// Create a paste from a client-sealed envelope plus policy fields.
    ///
    /// The envelope is validated structurally (base64 fields, all-or-none KDF
    /// parameters); no cryptographic work happens server-side. The optional
    /// delete token is hashed and discarded.
    pub async fn create(&self, request: CreatePaste) -> Result<CreatedPaste> {
        let envelope = &request.envelope;
        if envelope.ciphertext.is_empty() {
            return Err(PasteError::MissingField("ciphertext"));
        }
        if envelope.iv.is_empty() {
            return Err(PasteError::MissingField("iv"));
        }
        if envelope.alg.is_empty() {
            return Err(PasteError::MissingField("alg"));
        }
        if envelope.require_passphrase
            && (envelope.kdf.is_none() || envelope.salt.is_none() || envelope.iterations.is_none())
        {
            return Err(PasteError::MissingKdfParams);
        }
        envelope.decode()?;
        if envelope.iterations == Some(0) {
            return Err(PasteError::InvalidPolicy(
                "iterations must be positive".into(),
            ));
        }
        if request.max_reads == Some(0) {
            return Err(PasteError::InvalidPolicy("maxReads must be positive".into()));
        }

        let delete_token_hash = request.delete_token.as_deref().map(hash_delete_token);
        let id = Uuid::new_v4().to_string();
        let record = PasteRecord {
            id: id.clone(),
            ciphertext: envelope.ciphertext.clone(),
            iv: envelope.iv.clone(),
            alg: envelope.alg.clone(),
            kdf: envelope.kdf.clone(),
            salt: envelope.salt.clone(),
            iterations: envelope.iterations,
            require_passphrase: envelope.require_passphrase,
            title: request.title,
            language: request.language,
            version: request.version.unwrap_or(1),
            expires_at: request.expires_at,
            burn_after_read: request.burn_after_read,
            max_reads: request.max_reads,
            reads: 0,
            delete_token_hash,
            created_at: Utc::now(),
        };
        let require_passphrase = record.require_passphrase;
        self.store.insert(record).await?;
        tracing::debug!(id = %id, require_passphrase, "paste created");
        Ok(CreatedPaste {
            id,
            require_passphrase,
        })
    }

    /// Read a paste, counting the read and applying expiry/burn/limit policy.
    ///
    /// The caller receives the snapshot as of this call even when this read
    /// consumes the record. Absent and consumed pastes are `NotFound`/`Gone`;
    /// neither reveals whether the id ever existed.
    pub async fn read(&self, id: &str) -> Result<PasteSnapshot> {
        loop {
            let Some(record) = self.store.get(id).await? else {
                return Err(PasteError::NotFound);
            };
            match policy::evaluate(&record, Utc::now()) {
                ReadDisposition::Expired => {
                    self.store.remove(id).await?;
                    tracing::debug!(id = %id, "expired paste purged on read");
                    return Err(PasteError::Gone);
                }
                ReadDisposition::Serve { next_reads, delete } => {
                    let committed = if delete {
                        self.store.remove_if_reads(id, record.reads).await?
                    } else {
                        self.store.update_reads(id, record.reads, next_reads).await?
                    };
                    if committed {
                        if delete {
                            tracing::debug!(id = %id, reads = next_reads, "paste consumed");
                        }
                        return Ok(PasteSnapshot::from(&record));
                    }
                    // Lost the CAS to a concurrent read or delete; re-read
                    // and re-evaluate from fresh state.
                }
            }
        }
    }

    /// Delete a paste with its client-held token.
    ///
    /// An absent paste succeeds silently: deletion is idempotent and must not
    /// reveal whether the id ever existed. A present paste requires a token
    /// whose hash matches the stored digest; a record created without a
    /// delete token can never be deleted this way.
    pub async fn delete(&self, id: &str, token: Option<&str>) -> Result<()> {
        let Some(token) = token else {
            return Err(PasteError::MissingDeleteToken);
        };
        let Some(record) = self.store.get(id).await? else {
            return Ok(());
        };
        let authorized = record
            .delete_token_hash
            .as_deref()
            .is_some_and(|stored| verify_delete_token(token, stored));
        if !authorized {
            return Err(PasteError::Forbidden);
        }
        self.store.remove(id).await?;
        tracing::info!(id = %id, "paste deleted by token");
        Ok(())
    }

    /// Purge every expired paste. Invoked periodically by
    /// [`sweeper::ExpirySweeper`]; safe to call concurrently with reads —
    /// expiry is also enforced on the read path.
    pub async fn purge_expired(&self) -> Result<usize> {
        let purged = self.store.purge_expired(Utc::now()).await?;
        if purged > 0 {
            tracing::debug!(purged, "expired pastes purged");
        }
        Ok(purged)
    }
}
