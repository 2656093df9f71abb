/// AES-GCM IV length in bytes (96 bits per NIST recommendation).
pub const AES_GCM_IV_LENGTH: usize = 12;

/// AES-GCM tag length in bytes (128 bits).
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// PBKDF2 salt length in bytes, generated fresh per paste.
pub const SALT_LENGTH: usize = 16;

/// Delete-token length in bytes before base64url encoding.
pub const DELETE_TOKEN_LENGTH: usize = 16;

/// Default PBKDF2 iteration count for passphrase-derived keys.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 200_000;

/// Cipher identifier written into every envelope.
pub const ALG_AES_256_GCM: &str = "AES-GCM-256";

/// KDF identifier written into passphrase-protected envelopes.
pub const KDF_PBKDF2_SHA256: &str = "PBKDF2-SHA256";
