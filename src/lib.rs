//! Zero-knowledge paste store core.
//!
//! Clients encrypt locally with `ashbin-crypto`; this crate stores the opaque
//! envelope plus non-secret metadata and enforces read-count, expiry, and
//! deletion policy. No key material ever reaches these types — the only
//! crypto the server touches is hashing delete tokens and structural
//! validation of envelope encoding.

pub mod error;
pub mod lifecycle;
pub mod store;
pub mod types;

pub use error::{PasteError, Result};
pub use lifecycle::policy::ReadDisposition;
pub use lifecycle::sweeper::ExpirySweeper;
pub use lifecycle::PasteService;
pub use store::{MemoryStore, PasteStore};
pub use types::{CreatePaste, CreatedPaste, PasteRecord, PasteSnapshot};
