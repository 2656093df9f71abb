//! Delete-token generation and one-way hashing.
//!
//! The token itself stays with the client; the server persists only its
//! SHA-256 digest. Losing the token means the paste can only disappear by
//! expiry or burn.

use sha2::{Digest, Sha256};

use crate::base64url::base64url_encode;
use crate::error::CryptoError;
use crate::types::DELETE_TOKEN_LENGTH;

/// Generate a random delete token (16 bytes, base64url, 22 characters).
pub fn generate_delete_token() -> Result<String, CryptoError> {
    let mut bytes = [0u8; DELETE_TOKEN_LENGTH];
    getrandom::getrandom(&mut bytes).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(base64url_encode(&bytes))
}

/// Hash a delete token to its stored form: lowercase hex SHA-256.
pub fn hash_delete_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Check a supplied token against a stored digest.
///
/// Compares one-way digests, not secrets; a mismatch reveals nothing about
/// the stored token.
pub fn verify_delete_token(token: &str, stored_digest: &str) -> bool {
    hash_delete_token(token) == stored_digest
}
