use ashbin_crypto::WireEnvelope;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_version() -> u32 {
    1
}

/// The persisted unit: an opaque envelope plus non-secret metadata and
/// access policy. Nothing in a record can decrypt the ciphertext.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasteRecord {
    /// Server-assigned opaque identifier; never reused.
    pub id: String,
    /// Ciphertext with appended auth tag, base64url.
    pub ciphertext: String,
    /// 96-bit IV, base64url.
    pub iv: String,
    /// Cipher identifier, e.g. "AES-GCM-256".
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kdf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    #[serde(rename = "requirePassphrase", default)]
    pub require_passphrase: bool,
    /// Optional non-secret display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional non-secret syntax label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Envelope format version.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Once passed, the paste is purged on the next read.
    #[serde(rename = "expiresAt", default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Destroy after the first successful read.
    #[serde(rename = "burnAfterRead", default)]
    pub burn_after_read: bool,
    /// Ceiling on the read count; the record is deleted by the read that
    /// reaches it.
    #[serde(rename = "maxReads", default, skip_serializing_if = "Option::is_none")]
    pub max_reads: Option<u32>,
    /// Incremented exactly once per successful retrieval.
    #[serde(default)]
    pub reads: u32,
    /// Hex SHA-256 of the client-held delete token; the token itself is
    /// never stored.
    #[serde(rename = "deleteTokenHash", default, skip_serializing_if = "Option::is_none")]
    pub delete_token_hash: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A create request: envelope fields flat alongside policy fields, matching
/// the transport body shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaste {
    #[serde(flatten)]
    pub envelope: WireEnvelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(rename = "expiresAt", default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(rename = "burnAfterRead", default)]
    pub burn_after_read: bool,
    #[serde(rename = "maxReads", default, skip_serializing_if = "Option::is_none")]
    pub max_reads: Option<u32>,
    /// The raw client token; only its hash is persisted.
    #[serde(rename = "deleteToken", default, skip_serializing_if = "Option::is_none")]
    pub delete_token: Option<String>,
}

/// Create response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedPaste {
    pub id: String,
    #[serde(rename = "requirePassphrase")]
    pub require_passphrase: bool,
}

/// What a reader gets back: the envelope and display fields only. Policy
/// internals (`reads`, `expires_at`, the delete-token hash) stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasteSnapshot {
    pub ciphertext: String,
    pub iv: String,
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kdf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    #[serde(rename = "requirePassphrase")]
    pub require_passphrase: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub version: u32,
}

impl From<&PasteRecord> for PasteSnapshot {
    fn from(record: &PasteRecord) -> Self {
        Self {
            ciphertext: record.ciphertext.clone(),
            iv: record.iv.clone(),
            alg: record.alg.clone(),
            kdf: record.kdf.clone(),
            salt: record.salt.clone(),
            iterations: record.iterations,
            require_passphrase: record.require_passphrase,
            title: record.title.clone(),
            language: record.language.clone(),
            version: record.version,
        }
    }
}

impl PasteSnapshot {
    /// Reassemble the wire envelope for client-side decryption.
    pub fn envelope(&self) -> WireEnvelope {
        WireEnvelope {
            ciphertext: self.ciphertext.clone(),
            iv: self.iv.clone(),
            alg: self.alg.clone(),
            kdf: self.kdf.clone(),
            salt: self.salt.clone(),
            iterations: self.iterations,
            require_passphrase: self.require_passphrase,
        }
    }
}
