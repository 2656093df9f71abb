//! Key material: random 256-bit keys and PBKDF2-SHA256 passphrase derivation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::base64url::{base64url_decode, base64url_encode};
use crate::error::CryptoError;
use crate::types::{AES_KEY_LENGTH, SALT_LENGTH};

/// A 256-bit symmetric paste key.
///
/// Zeroized on drop. Never serialized; the only sanctioned escape is
/// [`PasteKey::to_fragment`], which produces the base64url text a client puts
/// in the URL fragment (and the fragment never reaches the server).
#[derive(Clone)]
pub struct PasteKey {
    bytes: [u8; AES_KEY_LENGTH],
}

impl PasteKey {
    pub fn from_bytes(bytes: [u8; AES_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.bytes
    }

    /// Encode for the share-link URL fragment.
    pub fn to_fragment(&self) -> String {
        base64url_encode(&self.bytes)
    }

    /// Decode a key from a URL fragment.
    pub fn from_fragment(fragment: &str) -> Result<Self, CryptoError> {
        let bytes = base64url_decode("key", fragment)
            .map_err(|_| CryptoError::InvalidKey("fragment is not valid base64url".into()))?;
        let bytes: [u8; AES_KEY_LENGTH] =
            bytes
                .try_into()
                .map_err(|v: Vec<u8>| CryptoError::InvalidKeyLength {
                    expected: AES_KEY_LENGTH,
                    got: v.len(),
                })?;
        Ok(Self { bytes })
    }
}

impl Drop for PasteKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for PasteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Generate a random 256-bit paste key.
pub fn generate_key() -> Result<PasteKey, CryptoError> {
    let mut bytes = [0u8; AES_KEY_LENGTH];
    getrandom::getrandom(&mut bytes).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(PasteKey::from_bytes(bytes))
}

/// Generate a fresh 16-byte KDF salt as base64url text.
///
/// The salt is stored alongside the paste; it does not need to be secret.
pub fn generate_salt() -> Result<String, CryptoError> {
    let mut salt = [0u8; SALT_LENGTH];
    getrandom::getrandom(&mut salt).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(base64url_encode(&salt))
}

/// Derive a 256-bit key from a passphrase with PBKDF2-HMAC-SHA-256.
///
/// Deterministic: the same passphrase, salt, and iteration count always yield
/// the same key, so any viewer who knows the passphrase can re-derive it from
/// the stored parameters. A wrong passphrase yields a wrong key, detected
/// later by authenticated decryption rather than here.
pub fn derive_key(
    passphrase: &str,
    salt_b64u: &str,
    iterations: u32,
) -> Result<PasteKey, CryptoError> {
    if iterations == 0 {
        return Err(CryptoError::Derivation(
            "iteration count must be positive".into(),
        ));
    }
    let salt = base64url_decode("salt", salt_b64u)
        .map_err(|_| CryptoError::Derivation("salt is not valid base64url".into()))?;

    let mut key = [0u8; AES_KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), &salt, iterations, &mut key);
    Ok(PasteKey::from_bytes(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keep test iteration counts small; correctness does not depend on cost.
    const TEST_ITERATIONS: u32 = 1_000;

    #[test]
    fn generated_keys_are_unique() {
        let k1 = generate_key().unwrap();
        let k2 = generate_key().unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn derivation_is_deterministic() {
        let salt = generate_salt().unwrap();
        let k1 = derive_key("correct horse battery staple", &salt, TEST_ITERATIONS).unwrap();
        let k2 = derive_key("correct horse battery staple", &salt, TEST_ITERATIONS).unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_salts_different_keys() {
        let s1 = generate_salt().unwrap();
        let s2 = generate_salt().unwrap();
        assert_ne!(s1, s2);
        let k1 = derive_key("passphrase", &s1, TEST_ITERATIONS).unwrap();
        let k2 = derive_key("passphrase", &s2, TEST_ITERATIONS).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_passphrases_different_keys() {
        let salt = generate_salt().unwrap();
        let k1 = derive_key("passphrase-a", &salt, TEST_ITERATIONS).unwrap();
        let k2 = derive_key("passphrase-b", &salt, TEST_ITERATIONS).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_iterations_different_keys() {
        let salt = generate_salt().unwrap();
        let k1 = derive_key("passphrase", &salt, TEST_ITERATIONS).unwrap();
        let k2 = derive_key("passphrase", &salt, TEST_ITERATIONS + 1).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn rejects_zero_iterations() {
        let salt = generate_salt().unwrap();
        assert!(matches!(
            derive_key("passphrase", &salt, 0).unwrap_err(),
            CryptoError::Derivation(_)
        ));
    }

    #[test]
    fn rejects_malformed_salt() {
        assert!(matches!(
            derive_key("passphrase", "not/base64url=", TEST_ITERATIONS).unwrap_err(),
            CryptoError::Derivation(_)
        ));
    }

    #[test]
    fn fragment_round_trip() {
        let key = generate_key().unwrap();
        let fragment = key.to_fragment();
        assert_eq!(fragment.len(), 43);
        let decoded = PasteKey::from_fragment(&fragment).unwrap();
        assert_eq!(decoded.as_bytes(), key.as_bytes());
    }

    #[test]
    fn fragment_wrong_length_fails() {
        let short = base64url_encode(&[1u8; 16]);
        assert!(matches!(
            PasteKey::from_fragment(&short).unwrap_err(),
            CryptoError::InvalidKeyLength { expected: 32, got: 16 }
        ));
    }

    #[test]
    fn debug_does_not_leak_key() {
        let key = generate_key().unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains(&key.to_fragment()));
    }
}
