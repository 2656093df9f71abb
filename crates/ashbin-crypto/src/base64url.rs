//! Base64url (unpadded) encoding for envelope and token fields.

use base64ct::{Base64UrlUnpadded, Encoding};

use crate::error::CryptoError;

/// Encode bytes as unpadded base64url text.
pub fn base64url_encode(data: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(data)
}

/// Decode unpadded base64url text to bytes.
///
/// Every caller is decoding a transported envelope field, so failures map to
/// [`CryptoError::MalformedEnvelope`] naming the offending field.
pub fn base64url_decode(field: &'static str, s: &str) -> Result<Vec<u8>, CryptoError> {
    Base64UrlUnpadded::decode_vec(s)
        .map_err(|e| CryptoError::MalformedEnvelope(format!("{field}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let data = b"arbitrary bytes \x00\xff\x80";
        let encoded = base64url_encode(data);
        assert_eq!(base64url_decode("data", &encoded).unwrap(), data);
    }

    #[test]
    fn unpadded_and_url_safe() {
        // Bytes that produce + / = in standard base64
        let encoded = base64url_encode(&[0xfb, 0xff, 0xfe, 0x01]);
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn empty_input() {
        assert_eq!(base64url_encode(b""), "");
        assert_eq!(base64url_decode("data", "").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_standard_base64() {
        let err = base64url_decode("iv", "abc=").unwrap_err();
        assert!(err.to_string().contains("iv"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(base64url_decode("ciphertext", "not base64 at all!").is_err());
    }
}
