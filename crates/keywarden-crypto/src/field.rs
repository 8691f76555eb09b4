// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256-CBC encryption of individual vault fields.
//!
//! Every call to [`encrypt_field`] generates a fresh random 16-byte IV via
//! the system CSPRNG; an IV is never reused, even for the same plaintext and
//! key. The wire encoding is `hex(IV) || base64(ciphertext)`: the first 32
//! hex characters are always the IV, so decryption can split the blob
//! unambiguously. This exact layout is a compatibility contract -- changing
//! it orphans previously stored data.
//!
//! CBC with PKCS#7 carries no authentication tag, so wrong-key decryption is
//! detected structurally: the padding check, the UTF-8 check, and the
//! empty-plaintext check each fail closed with a `Decryption` error.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use keywarden_core::{EncryptedField, KeywardenError};
use ring::rand::{SecureRandom, SystemRandom};

use crate::kdf::KEY_LEN;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// IV length in bytes.
pub const IV_LEN: usize = 16;

/// Length of the hex-encoded IV prefix on every blob.
pub const IV_HEX_LEN: usize = IV_LEN * 2;

const BLOCK_LEN: usize = 16;

/// Smallest well-formed blob: one hex IV plus the base64 of a single padded
/// cipher block.
const MIN_BLOB_LEN: usize = IV_HEX_LEN + 24;

/// Encrypt one plaintext field under a derived key.
///
/// Fails with `InvalidInput` on empty plaintext and with `Encryption` only
/// if the system CSPRNG cannot produce an IV; otherwise always succeeds.
pub fn encrypt_field(
    plaintext: &str,
    key: &[u8; KEY_LEN],
) -> Result<EncryptedField, KeywardenError> {
    if plaintext.is_empty() {
        return Err(KeywardenError::InvalidInput(
            "plaintext is required for field encryption".to_string(),
        ));
    }

    let rng = SystemRandom::new();
    let mut iv = [0u8; IV_LEN];
    rng.fill(&mut iv)
        .map_err(|_| KeywardenError::Encryption("failed to generate random IV".to_string()))?;

    let ciphertext = Aes256CbcEnc::new(key.into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(EncryptedField(format!(
        "{}{}",
        hex::encode(iv),
        BASE64.encode(ciphertext)
    )))
}

/// Decrypt one field blob with a derived key.
///
/// Fails with `Decryption` on a malformed blob (too short, bad IV hex, bad
/// base64, ragged block length), on a padding-check failure, or when the
/// recovered bytes are not non-empty UTF-8 text -- the structural proxies
/// for "wrong key or corrupted ciphertext".
pub fn decrypt_field(
    blob: &EncryptedField,
    key: &[u8; KEY_LEN],
) -> Result<String, KeywardenError> {
    let raw = blob.as_str();
    if raw.len() < MIN_BLOB_LEN {
        return Err(KeywardenError::Decryption(
            "encrypted field is shorter than the minimum viable length".to_string(),
        ));
    }

    let (iv_hex, body) = raw.split_at(IV_HEX_LEN);
    let iv_bytes = hex::decode(iv_hex)
        .map_err(|_| KeywardenError::Decryption("malformed IV prefix".to_string()))?;
    let iv: [u8; IV_LEN] = iv_bytes
        .try_into()
        .map_err(|_| KeywardenError::Decryption("malformed IV prefix".to_string()))?;

    let ciphertext = BASE64
        .decode(body)
        .map_err(|_| KeywardenError::Decryption("malformed ciphertext body".to_string()))?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(KeywardenError::Decryption(
            "ciphertext is not a whole number of cipher blocks".to_string(),
        ));
    }

    let plaintext = Aes256CbcDec::new(key.into(), (&iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| {
            KeywardenError::Decryption(
                "padding check failed -- wrong credentials or corrupted data".to_string(),
            )
        })?;

    let text = String::from_utf8(plaintext).map_err(|_| {
        KeywardenError::Decryption("recovered bytes are not valid UTF-8".to_string())
    })?;
    if text.is_empty() {
        return Err(KeywardenError::Decryption(
            "empty plaintext from non-empty ciphertext -- wrong credentials".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key(fill: u8) -> [u8; KEY_LEN] {
        [fill; KEY_LEN]
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let key = test_key(7);
        let blob = encrypt_field("hunter2", &key).unwrap();
        let decrypted = decrypt_field(&blob, &key).unwrap();
        assert_eq!(decrypted, "hunter2");
    }

    #[test]
    fn roundtrip_preserves_unicode() {
        let key = test_key(9);
        let plaintext = "pässwörd 🔑 with spaces";
        let blob = encrypt_field(plaintext, &key).unwrap();
        assert_eq!(decrypt_field(&blob, &key).unwrap(), plaintext);
    }

    #[test]
    fn iv_is_fresh_per_call() {
        let key = test_key(1);
        let blob1 = encrypt_field("same input twice", &key).unwrap();
        let blob2 = encrypt_field("same input twice", &key).unwrap();

        // Different IV prefixes and different ciphertext bodies.
        assert_ne!(&blob1.as_str()[..IV_HEX_LEN], &blob2.as_str()[..IV_HEX_LEN]);
        assert_ne!(&blob1.as_str()[IV_HEX_LEN..], &blob2.as_str()[IV_HEX_LEN..]);
    }

    #[test]
    fn blob_starts_with_hex_iv() {
        let key = test_key(2);
        let blob = encrypt_field("check the prefix", &key).unwrap();
        assert!(blob.len() > IV_HEX_LEN);
        assert!(blob.as_str()[..IV_HEX_LEN]
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn wrong_key_fails_closed() {
        let blob = encrypt_field("secret data", &test_key(3)).unwrap();
        let result = decrypt_field(&blob, &test_key(4));
        assert!(matches!(result, Err(KeywardenError::Decryption(_))));
    }

    #[test]
    fn empty_plaintext_is_rejected() {
        let result = encrypt_field("", &test_key(5));
        assert!(matches!(result, Err(KeywardenError::InvalidInput(_))));
    }

    #[test]
    fn short_blob_is_rejected() {
        let result = decrypt_field(&EncryptedField("deadbeef".to_string()), &test_key(5));
        assert!(matches!(result, Err(KeywardenError::Decryption(_))));
    }

    #[test]
    fn non_hex_iv_prefix_is_rejected() {
        let key = test_key(6);
        let blob = encrypt_field("valid field", &key).unwrap();
        let mangled = format!("zz{}", &blob.as_str()[2..]);
        let result = decrypt_field(&EncryptedField(mangled), &key);
        assert!(matches!(result, Err(KeywardenError::Decryption(_))));
    }

    #[test]
    fn malformed_base64_body_is_rejected() {
        let key = test_key(6);
        let blob = encrypt_field("valid field", &key).unwrap();
        let mangled = format!("{}!!not-base64!!", &blob.as_str()[..IV_HEX_LEN]);
        let result = decrypt_field(&EncryptedField(mangled), &key);
        assert!(matches!(result, Err(KeywardenError::Decryption(_))));
    }

    #[test]
    fn truncated_body_is_rejected() {
        let key = test_key(8);
        let long_input = "a".repeat(100);
        let blob = encrypt_field(&long_input, &key).unwrap();
        // Drop the last four base64 characters: still parseable base64, but
        // no longer a whole number of cipher blocks.
        let truncated = blob.as_str()[..blob.len() - 4].to_string();
        let result = decrypt_field(&EncryptedField(truncated), &key);
        assert!(matches!(result, Err(KeywardenError::Decryption(_))));
    }
}
