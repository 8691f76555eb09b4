// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PBKDF2 key derivation from the user's credentials.
//!
//! Derives a 32-byte key using PBKDF2-HMAC-SHA256 with the identity string
//! as the salt and the passphrase as the key material. The iteration count
//! is a fixed constant rather than a config value so a misconfigured client
//! cannot silently weaken derivation.
//!
//! Determinism is the load-bearing property: the key is a pure function of
//! (identity, passphrase), with no stored salt or parameters, so it survives
//! process restarts and token refreshes. The flip side is that changing the
//! passphrase orphans every previously encrypted item unless each one is
//! re-encrypted under the new key at change time.

use std::num::NonZeroU32;

use keywarden_core::KeywardenError;
use ring::pbkdf2;
use zeroize::Zeroizing;

/// Length of a derived key in bytes (AES-256 key size).
pub const KEY_LEN: usize = 32;

/// Fixed PBKDF2 iteration count. Not user-configurable.
const PBKDF2_ROUNDS: NonZeroU32 = NonZeroU32::new(100_000).unwrap();

/// Derive a 32-byte key from the user's identity and passphrase.
///
/// The returned key is wrapped in [`Zeroizing`] for automatic memory zeroing
/// on drop. Both inputs must be non-empty.
pub fn derive_key(
    identity: &str,
    passphrase: &str,
) -> Result<Zeroizing<[u8; KEY_LEN]>, KeywardenError> {
    if identity.is_empty() {
        return Err(KeywardenError::InvalidInput(
            "identity is required for key derivation".to_string(),
        ));
    }
    if passphrase.is_empty() {
        return Err(KeywardenError::InvalidInput(
            "passphrase is required for key derivation".to_string(),
        ));
    }

    let mut output = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        PBKDF2_ROUNDS,
        identity.as_bytes(),
        passphrase.as_bytes(),
        output.as_mut(),
    );

    Ok(output)
}
