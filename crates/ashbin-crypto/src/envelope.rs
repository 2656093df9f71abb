//! Ciphertext envelope codec.
//!
//! An [`Envelope`] bundles everything the server ever stores for a paste's
//! content: ciphertext, IV, cipher tag, and (for passphrase-protected pastes)
//! the KDF parameters needed to re-derive the key. Binary fields travel as
//! unpadded base64url text in the [`WireEnvelope`] form. The codec performs no
//! cryptographic work.

use serde::{Deserialize, Serialize};

use crate::base64url::{base64url_decode, base64url_encode};
use crate::error::CryptoError;
use crate::types::KDF_PBKDF2_SHA256;

/// How the key for an envelope is obtained, carrying only the data each
/// variant needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDerivation {
    /// Random 256-bit key, transported out-of-band (URL fragment). Nothing
    /// key-related is stored.
    Random,
    /// Key re-derived from a passphrase the viewer supplies. Salt and
    /// iteration count are stored with the paste; neither is secret.
    Pbkdf2 {
        /// Per-paste random salt, base64url text as stored/transmitted.
        salt: String,
        /// PBKDF2 iteration count.
        iterations: u32,
    },
}

/// Decoded envelope: binary fields plus the key-derivation variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub ciphertext: Vec<u8>,
    pub iv: Vec<u8>,
    pub alg: String,
    pub derivation: KeyDerivation,
}

/// Transport form of an envelope: base64url text fields, flat KDF parameters.
///
/// Field names match the persisted record layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireEnvelope {
    /// Ciphertext with appended auth tag, base64url.
    pub ciphertext: String,
    /// 96-bit IV, base64url.
    pub iv: String,
    /// Cipher identifier, e.g. "AES-GCM-256".
    pub alg: String,
    /// KDF identifier, present iff passphrase-protected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kdf: Option<String>,
    /// KDF salt, base64url, present iff passphrase-protected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    /// KDF iteration count, present iff passphrase-protected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    /// True iff the key must be re-derived from a viewer-supplied passphrase.
    #[serde(rename = "requirePassphrase", default)]
    pub require_passphrase: bool,
}

impl Envelope {
    /// Encode into the transport form. Pure data transformation.
    pub fn encode(&self) -> WireEnvelope {
        let (kdf, salt, iterations, require_passphrase) = match &self.derivation {
            KeyDerivation::Random => (None, None, None, false),
            KeyDerivation::Pbkdf2 { salt, iterations } => (
                Some(KDF_PBKDF2_SHA256.to_string()),
                Some(salt.clone()),
                Some(*iterations),
                true,
            ),
        };
        WireEnvelope {
            ciphertext: base64url_encode(&self.ciphertext),
            iv: base64url_encode(&self.iv),
            alg: self.alg.clone(),
            kdf,
            salt,
            iterations,
            require_passphrase,
        }
    }
}

impl WireEnvelope {
    /// Decode back to binary form.
    ///
    /// Fails with [`CryptoError::MalformedEnvelope`] on bad base64 or a
    /// partial/inconsistent KDF parameter set: an envelope either carries no
    /// KDF fields at all, or the full set with a recognized `kdf` tag.
    pub fn decode(&self) -> Result<Envelope, CryptoError> {
        let ciphertext = base64url_decode("ciphertext", &self.ciphertext)?;
        let iv = base64url_decode("iv", &self.iv)?;

        let derivation = match (&self.kdf, &self.salt, self.iterations) {
            (None, None, None) => {
                if self.require_passphrase {
                    return Err(CryptoError::MalformedEnvelope(
                        "requirePassphrase set without KDF parameters".into(),
                    ));
                }
                KeyDerivation::Random
            }
            (Some(kdf), Some(salt), Some(iterations)) => {
                if kdf != KDF_PBKDF2_SHA256 {
                    return Err(CryptoError::MalformedEnvelope(format!(
                        "unknown kdf: {kdf}"
                    )));
                }
                if !self.require_passphrase {
                    return Err(CryptoError::MalformedEnvelope(
                        "KDF parameters present without requirePassphrase".into(),
                    ));
                }
                KeyDerivation::Pbkdf2 {
                    salt: salt.clone(),
                    iterations,
                }
            }
            _ => {
                return Err(CryptoError::MalformedEnvelope(
                    "partial KDF parameter set".into(),
                ))
            }
        };

        Ok(Envelope {
            ciphertext,
            iv,
            alg: self.alg.clone(),
            derivation,
        })
    }
}
