//! AES-256-GCM cipher engine.
//!
//! The IV is freshly random for every encryption and travels as a separate
//! envelope field; the auth tag is appended to the ciphertext per the aead
//! crate's standard construction. A key+IV pair is never reused.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::error::CryptoError;
use crate::kdf::PasteKey;
use crate::types::AES_GCM_IV_LENGTH;

/// Generate a random 12-byte IV.
fn generate_iv() -> Result<[u8; AES_GCM_IV_LENGTH], CryptoError> {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(iv)
}

/// Encrypt plaintext under `key` with a fresh random IV.
///
/// Returns the ciphertext (tag appended) and the IV used.
pub fn encrypt(key: &PasteKey, plaintext: &[u8]) -> Result<(Vec<u8>, [u8; AES_GCM_IV_LENGTH]), CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::InvalidKeyLength {
            expected: 32,
            got: key.as_bytes().len(),
        })?;
    let iv = generate_iv()?;
    let nonce = Nonce::from_slice(&iv);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| CryptoError::AuthenticationFailure)?;
    Ok((ciphertext, iv))
}

/// Decrypt ciphertext under `key` and `iv`.
///
/// Fails with [`CryptoError::AuthenticationFailure`] whenever the tag does
/// not verify — wrong key, wrong passphrase, or tampered data all look the
/// same. No partial plaintext is ever returned.
pub fn decrypt(key: &PasteKey, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if iv.len() != AES_GCM_IV_LENGTH {
        return Err(CryptoError::InvalidIvLength {
            expected: AES_GCM_IV_LENGTH,
            got: iv.len(),
        });
    }
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::InvalidKeyLength {
            expected: 32,
            got: key.as_bytes().len(),
        })?;
    let nonce = Nonce::from_slice(iv);
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::generate_key;

    #[test]
    fn encrypt_decrypt_round_trip() {
        let key = generate_key().unwrap();
        let (ct, iv) = encrypt(&key, b"Hello, World!").unwrap();
        assert_eq!(decrypt(&key, &ct, &iv).unwrap(), b"Hello, World!");
    }

    #[test]
    fn fresh_iv_each_call() {
        let key = generate_key().unwrap();
        let (ct1, iv1) = encrypt(&key, b"same input").unwrap();
        let (ct2, iv2) = encrypt(&key, b"same input").unwrap();
        assert_ne!(iv1, iv2);
        assert_ne!(ct1, ct2);
    }

    #[test]
    fn ciphertext_includes_tag() {
        let key = generate_key().unwrap();
        let (ct, _) = encrypt(&key, b"abc").unwrap();
        assert_eq!(ct.len(), 3 + crate::types::AES_GCM_TAG_LENGTH);
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let key = generate_key().unwrap();
        let (mut ct, iv) = encrypt(&key, b"secret").unwrap();
        for i in 0..ct.len() {
            ct[i] ^= 0x01;
            assert!(matches!(
                decrypt(&key, &ct, &iv).unwrap_err(),
                CryptoError::AuthenticationFailure
            ));
            ct[i] ^= 0x01;
        }
    }

    #[test]
    fn tampered_iv_fails() {
        let key = generate_key().unwrap();
        let (ct, mut iv) = encrypt(&key, b"secret").unwrap();
        iv[0] ^= 0x80;
        assert!(matches!(
            decrypt(&key, &ct, &iv).unwrap_err(),
            CryptoError::AuthenticationFailure
        ));
    }

    #[test]
    fn wrong_key_fails() {
        let key1 = generate_key().unwrap();
        let key2 = generate_key().unwrap();
        let (ct, iv) = encrypt(&key1, b"secret").unwrap();
        assert!(matches!(
            decrypt(&key2, &ct, &iv).unwrap_err(),
            CryptoError::AuthenticationFailure
        ));
    }

    #[test]
    fn wrong_iv_length_fails() {
        let key = generate_key().unwrap();
        let (ct, _) = encrypt(&key, b"secret").unwrap();
        assert!(decrypt(&key, &ct, &[0u8; 8]).is_err());
    }

    #[test]
    fn empty_plaintext() {
        let key = generate_key().unwrap();
        let (ct, iv) = encrypt(&key, b"").unwrap();
        assert_eq!(decrypt(&key, &ct, &iv).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn large_plaintext() {
        let key = generate_key().unwrap();
        let plaintext: Vec<u8> = (0..=255u8).cycle().take(256 * 1024).collect();
        let (ct, iv) = encrypt(&key, &plaintext).unwrap();
        assert_eq!(decrypt(&key, &ct, &iv).unwrap(), plaintext);
    }
}
