use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Key derivation failed: {0}")]
    Derivation(String),

    /// All cipher integrity failures collapse here: wrong key, wrong
    /// passphrase, and tampered data must be indistinguishable to callers.
    #[error("Decryption failed")]
    AuthenticationFailure,

    #[error("Invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("Invalid key encoding: {0}")]
    InvalidKey(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
