//! High-level client pipelines.
//!
//! Seal: plaintext → key (random or PBKDF2) → AES-256-GCM → envelope.
//! Open: envelope → key (fragment or re-derived) → decrypt → text.
//!
//! The random-key path exports the key only as the URL-fragment string; the
//! passphrase path exports no key material at all, only salt and iteration
//! count inside the envelope.

use crate::aes_gcm::{decrypt, encrypt};
use crate::envelope::{Envelope, KeyDerivation};
use crate::error::CryptoError;
use crate::kdf::{derive_key, generate_key, generate_salt, PasteKey};
use crate::types::{ALG_AES_256_GCM, DEFAULT_PBKDF2_ITERATIONS};

/// Everything a client produces when sealing a paste.
pub struct SealedPaste {
    /// Envelope to submit to the server.
    pub envelope: Envelope,
    /// Base64url key for the share-link fragment; `None` when
    /// passphrase-protected.
    pub key_fragment: Option<String>,
    /// Client-held delete token; only its hash is submitted.
    pub delete_token: String,
}

/// Seal plaintext under a fresh random key.
pub fn seal(plaintext: &str) -> Result<SealedPaste, CryptoError> {
    let key = generate_key()?;
    let (ciphertext, iv) = encrypt(&key, plaintext.as_bytes())?;
    Ok(SealedPaste {
        envelope: Envelope {
            ciphertext,
            iv: iv.to_vec(),
            alg: ALG_AES_256_GCM.to_string(),
            derivation: KeyDerivation::Random,
        },
        key_fragment: Some(key.to_fragment()),
        delete_token: crate::delete_token::generate_delete_token()?,
    })
}

/// Seal plaintext under a passphrase-derived key.
///
/// Generates a fresh salt and uses [`DEFAULT_PBKDF2_ITERATIONS`]; both are
/// recorded in the envelope so any viewer who knows the passphrase can
/// re-derive the key.
pub fn seal_with_passphrase(plaintext: &str, passphrase: &str) -> Result<SealedPaste, CryptoError> {
    let salt = generate_salt()?;
    let iterations = DEFAULT_PBKDF2_ITERATIONS;
    let key = derive_key(passphrase, &salt, iterations)?;
    let (ciphertext, iv) = encrypt(&key, plaintext.as_bytes())?;
    Ok(SealedPaste {
        envelope: Envelope {
            ciphertext,
            iv: iv.to_vec(),
            alg: ALG_AES_256_GCM.to_string(),
            derivation: KeyDerivation::Pbkdf2 { salt, iterations },
        },
        key_fragment: None,
        delete_token: crate::delete_token::generate_delete_token()?,
    })
}

/// Open an envelope with the key from a share-link fragment.
pub fn open_with_key_fragment(envelope: &Envelope, fragment: &str) -> Result<String, CryptoError> {
    let key = PasteKey::from_fragment(fragment)?;
    open(envelope, &key)
}

/// Open a passphrase-protected envelope by re-deriving its key.
pub fn open_with_passphrase(envelope: &Envelope, passphrase: &str) -> Result<String, CryptoError> {
    let KeyDerivation::Pbkdf2 { salt, iterations } = &envelope.derivation else {
        return Err(CryptoError::MalformedEnvelope(
            "missing KDF parameters".into(),
        ));
    };
    let key = derive_key(passphrase, salt, *iterations)?;
    open(envelope, &key)
}

fn open(envelope: &Envelope, key: &PasteKey) -> Result<String, CryptoError> {
    let plaintext = decrypt(key, &envelope.ciphertext, &envelope.iv)?;
    String::from_utf8(plaintext)
        .map_err(|_| CryptoError::MalformedEnvelope("plaintext is not valid UTF-8".into()))
}
