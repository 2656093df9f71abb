pub mod aes_gcm;
pub mod base64url;
pub mod delete_token;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod seal;
pub mod types;

pub use aes_gcm::{decrypt, encrypt};
pub use base64url::{base64url_decode, base64url_encode};
pub use delete_token::{generate_delete_token, hash_delete_token, verify_delete_token};
pub use envelope::{Envelope, KeyDerivation, WireEnvelope};
pub use error::CryptoError;
pub use kdf::{derive_key, generate_key, generate_salt, PasteKey};
pub use seal::{
    open_with_key_fragment, open_with_passphrase, seal, seal_with_passphrase, SealedPaste,
};
pub use types::{
    AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, ALG_AES_256_GCM,
    DEFAULT_PBKDF2_ITERATIONS, KDF_PBKDF2_SHA256, SALT_LENGTH,
};
