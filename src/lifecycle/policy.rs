//! Pure read-disposition evaluation.
//!
//! Separated from the service so the expiry/limit decision can be tested
//! without a store. The caller supplies `now`; the function never touches a
//! clock.

use chrono::{DateTime, Utc};

use crate::types::PasteRecord;

/// What a read of a record should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadDisposition {
    /// `expires_at` has passed: purge without serving.
    Expired,
    /// Serve this read, then either persist the new count or delete.
    Serve {
        /// The count this read commits (`reads + 1`).
        next_reads: u32,
        /// True when burn-after-read is set or `next_reads` reaches
        /// `max_reads`; the serving read deletes the record.
        delete: bool,
    },
}

pub fn evaluate(record: &PasteRecord, now: DateTime<Utc>) -> ReadDisposition {
    if let Some(expires_at) = record.expires_at {
        if expires_at < now {
            return ReadDisposition::Expired;
        }
    }
    let next_reads = record.reads.saturating_add(1);
    let limit_reached = record.max_reads.is_some_and(|max| next_reads >= max);
    ReadDisposition::Serve {
        next_reads,
        delete: record.burn_after_read || limit_reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record() -> PasteRecord {
        PasteRecord {
            id: "p1".to_string(),
            ciphertext: "Y3Q".to_string(),
            iv: "aXY".to_string(),
            alg: "AES-GCM-256".to_string(),
            kdf: None,
            salt: None,
            iterations: None,
            require_passphrase: false,
            title: None,
            language: None,
            version: 1,
            expires_at: None,
            burn_after_read: false,
            max_reads: None,
            reads: 0,
            delete_token_hash: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unlimited_paste_serves_and_keeps() {
        let disposition = evaluate(&record(), Utc::now());
        assert_eq!(
            disposition,
            ReadDisposition::Serve {
                next_reads: 1,
                delete: false
            }
        );
    }

    #[test]
    fn past_expiry_wins_over_everything() {
        let now = Utc::now();
        let rec = PasteRecord {
            expires_at: Some(now - Duration::seconds(1)),
            burn_after_read: true,
            ..record()
        };
        assert_eq!(evaluate(&rec, now), ReadDisposition::Expired);
    }

    #[test]
    fn future_expiry_serves() {
        let now = Utc::now();
        let rec = PasteRecord {
            expires_at: Some(now + Duration::hours(1)),
            ..record()
        };
        assert!(matches!(
            evaluate(&rec, now),
            ReadDisposition::Serve { delete: false, .. }
        ));
    }

    #[test]
    fn burn_after_read_deletes_on_first_read() {
        let rec = PasteRecord {
            burn_after_read: true,
            ..record()
        };
        assert_eq!(
            evaluate(&rec, Utc::now()),
            ReadDisposition::Serve {
                next_reads: 1,
                delete: true
            }
        );
    }

    #[test]
    fn max_reads_deletes_on_the_reaching_read() {
        let rec = PasteRecord {
            max_reads: Some(2),
            reads: 0,
            ..record()
        };
        assert_eq!(
            evaluate(&rec, Utc::now()),
            ReadDisposition::Serve {
                next_reads: 1,
                delete: false
            }
        );

        let rec = PasteRecord { reads: 1, ..rec };
        assert_eq!(
            evaluate(&rec, Utc::now()),
            ReadDisposition::Serve {
                next_reads: 2,
                delete: true
            }
        );
    }

    #[test]
    fn max_reads_one_burns_immediately() {
        let rec = PasteRecord {
            max_reads: Some(1),
            ..record()
        };
        assert_eq!(
            evaluate(&rec, Utc::now()),
            ReadDisposition::Serve {
                next_reads: 1,
                delete: true
            }
        );
    }
}
