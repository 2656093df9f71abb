use thiserror::Error;

pub type Result<T> = std::result::Result<T, PasteError>;

#[derive(Debug, Error)]
pub enum PasteError {
    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Missing KDF params")]
    MissingKdfParams,

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Missing token")]
    MissingDeleteToken,

    #[error("Not found")]
    NotFound,

    /// Expired or consumed. One variant for both: callers must not be able
    /// to tell whether an id ever existed.
    #[error("Gone")]
    Gone,

    #[error("Forbidden")]
    Forbidden,

    #[error("Crypto error: {0}")]
    Crypto(#[from] ashbin_crypto::CryptoError),

    #[error("Storage error: {0}")]
    Storage(String),
}
