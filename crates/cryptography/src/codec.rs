// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Symmetric payload codec for the encrypted request/response envelope.
//!
//! Uses AES-256-GCM. Key size: 32 bytes. Nonce: 12 bytes (random). Tag: 16 bytes.
//!
//! Ciphertext layout before base64 encoding:
//!   [ nonce (12 bytes) | ciphertext + tag ]
//!
//! `encrypt_payload` serializes the payload to JSON before sealing, so
//! `decrypt_payload` always yields JSON text; the caller owns the final parse.

use std::fmt::{Debug, Formatter};

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::Serialize;

use crate::error::CryptoError;

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;

/// Encrypts and decrypts the opaque envelope strings shared with the backend.
#[derive(Clone)]
pub struct PayloadCodec {
    key: [u8; KEY_LEN],
}

impl Debug for PayloadCodec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(PayloadCodec))
            .field("key", &"<redacted>")
            .finish()
    }
}

impl PayloadCodec {
    #[must_use]
    pub const fn new(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    /// Creates a codec from a base64-encoded 32-byte key.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoding is invalid or the key is not 32 bytes.
    pub fn from_base64_key(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| CryptoError::InvalidKey(format!("key is not valid base64: {e}")))?;
        let key: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKey(format!("key must be {KEY_LEN} bytes")))?;
        Ok(Self::new(key))
    }

    /// Serializes `payload` to JSON and seals it into an opaque base64 string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or encryption fails.
    pub fn encrypt_payload<T: Serialize>(&self, payload: &T) -> Result<String, CryptoError> {
        let plaintext =
            serde_json::to_vec(payload).map_err(|e| CryptoError::Serialization(e.to_string()))?;

        let cipher = Aes256Gcm::new_from_slice(&self.key).map_err(|_| CryptoError::Encrypt)?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_slice())
            .map_err(|_| CryptoError::Encrypt)?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(nonce.as_slice());
        sealed.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(sealed))
    }

    /// Opens an opaque base64 string produced by [`Self::encrypt_payload`]
    /// (or by the backend's matching codec) and returns the JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoding is invalid, authentication fails,
    /// or the plaintext is not UTF-8.
    pub fn decrypt_payload(&self, encoded: &str) -> Result<String, CryptoError> {
        let sealed = BASE64
            .decode(encoded)
            .map_err(|e| CryptoError::Encoding(e.to_string()))?;
        if sealed.len() < NONCE_LEN {
            return Err(CryptoError::Decrypt);
        }

        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
        let cipher = Aes256Gcm::new_from_slice(&self.key).map_err(|_| CryptoError::Decrypt)?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| CryptoError::Decrypt)?;

        String::from_utf8(plaintext).map_err(|_| CryptoError::Decrypt)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    fn test_codec() -> PayloadCodec {
        PayloadCodec::new([7u8; 32])
    }

    #[rstest]
    fn test_round_trip_preserves_payload() {
        let codec = test_codec();
        let payload = json!({"job_id": "123", "filters": {"status": "open"}, "page": 2});

        let ciphertext = codec.encrypt_payload(&payload).unwrap();
        let plaintext = codec.decrypt_payload(&ciphertext).unwrap();
        let recovered: Value = serde_json::from_str(&plaintext).unwrap();

        assert_eq!(recovered, payload);
    }

    #[rstest]
    fn test_ciphertext_is_opaque_and_fresh() {
        let codec = test_codec();
        let payload = json!({"a": 1});

        let first = codec.encrypt_payload(&payload).unwrap();
        let second = codec.encrypt_payload(&payload).unwrap();

        // Random nonce per call.
        assert_ne!(first, second);
        assert!(!first.contains("a"));
    }

    #[rstest]
    fn test_tampered_ciphertext_rejected() {
        let codec = test_codec();
        let ciphertext = codec.encrypt_payload(&json!({"a": 1})).unwrap();

        let mut sealed = BASE64.decode(&ciphertext).unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;
        let tampered = BASE64.encode(sealed);

        assert!(matches!(
            codec.decrypt_payload(&tampered),
            Err(CryptoError::Decrypt)
        ));
    }

    #[rstest]
    fn test_wrong_key_rejected() {
        let ciphertext = test_codec().encrypt_payload(&json!({"a": 1})).unwrap();
        let other = PayloadCodec::new([9u8; 32]);

        assert!(matches!(
            other.decrypt_payload(&ciphertext),
            Err(CryptoError::Decrypt)
        ));
    }

    #[rstest]
    fn test_invalid_encoding_rejected() {
        let codec = test_codec();

        assert!(matches!(
            codec.decrypt_payload("%%% not base64 %%%"),
            Err(CryptoError::Encoding(_))
        ));
        assert!(matches!(
            codec.decrypt_payload(&BASE64.encode([0u8; 4])),
            Err(CryptoError::Decrypt)
        ));
    }

    #[rstest]
    fn test_key_decoding() {
        let encoded = BASE64.encode([3u8; 32]);
        assert!(PayloadCodec::from_base64_key(&encoded).is_ok());

        assert!(matches!(
            PayloadCodec::from_base64_key("@@@"),
            Err(CryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            PayloadCodec::from_base64_key(&BASE64.encode([3u8; 16])),
            Err(CryptoError::InvalidKey(_))
        ));
    }
}
