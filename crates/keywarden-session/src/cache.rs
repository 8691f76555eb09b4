// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory passphrase cache, sealed under an ephemeral session key.
//!
//! `store` seals the passphrase with AES-256-GCM under a fresh random key;
//! both the ciphertext and the key live only in this object, in volatile
//! memory. Losing the object (process restart, logout) makes the passphrase
//! unrecoverable, which forces re-authentication -- that is the point.
//!
//! The cache is an explicit object with its own lifecycle, created per
//! session and passed to whoever needs it. There is no process-wide
//! singleton, so tests can instantiate isolated sessions.

use std::sync::{Mutex, PoisonError};

use keywarden_core::KeywardenError;
use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM};
use ring::rand::{SecureRandom, SystemRandom};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};
use zeroize::Zeroizing;

const SESSION_KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;

/// The sealed passphrase and the only key that can open it.
struct SealedPassphrase {
    session_key: Zeroizing<[u8; SESSION_KEY_LEN]>,
    nonce: [u8; NONCE_LEN],
    blob: Vec<u8>,
}

/// Session-scoped passphrase cache.
///
/// Mutation is expected from a single UI flow, but the mutex makes the
/// cache safe to share on a multi-threaded host.
pub struct PassphraseCache {
    state: Mutex<Option<SealedPassphrase>>,
}

impl std::fmt::Debug for PassphraseCache {
    /// Debug output intentionally omits the sealed state.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassphraseCache")
            .field("state", &"[REDACTED]")
            .finish()
    }
}

impl Default for PassphraseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PassphraseCache {
    /// Creates an empty cache for a fresh session.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Seals the passphrase under a fresh ephemeral key, replacing any
    /// previously cached value.
    pub fn store(&self, passphrase: &SecretString) -> Result<(), KeywardenError> {
        if passphrase.expose_secret().is_empty() {
            return Err(KeywardenError::InvalidInput(
                "passphrase is required".to_string(),
            ));
        }

        let rng = SystemRandom::new();
        let mut session_key = Zeroizing::new([0u8; SESSION_KEY_LEN]);
        rng.fill(session_key.as_mut()).map_err(|_| {
            KeywardenError::Encryption("failed to generate session key".to_string())
        })?;

        let (blob, nonce) = seal(&session_key, passphrase.expose_secret().as_bytes())?;

        let mut state = self.lock();
        *state = Some(SealedPassphrase {
            session_key,
            nonce,
            blob,
        });
        debug!("passphrase cached for session");
        Ok(())
    }

    /// Returns the cached passphrase, or `None` when nothing is cached.
    ///
    /// A decryption failure means the sealed state is corrupted; the cache
    /// clears itself and reports absent rather than returning garbage, so
    /// callers always end up on the re-authentication path.
    pub fn get(&self) -> Option<SecretString> {
        let mut state = self.lock();
        let sealed = state.as_ref()?;

        let opened = open(&sealed.session_key, &sealed.nonce, &sealed.blob)
            .and_then(|bytes| {
                String::from_utf8(bytes.to_vec()).map_err(|_| {
                    KeywardenError::Decryption("cached passphrase is not UTF-8".to_string())
                })
            });

        match opened {
            Ok(passphrase) => Some(SecretString::from(passphrase)),
            Err(_) => {
                warn!("cached passphrase unreadable; clearing session cache");
                *state = None;
                None
            }
        }
    }

    /// Whether a passphrase is currently cached and readable.
    pub fn has(&self) -> bool {
        self.get().is_some()
    }

    /// Erases both the sealed passphrase and the ephemeral key. Called on
    /// logout; afterwards nothing is recoverable from this cache.
    pub fn clear(&self) {
        let mut state = self.lock();
        if state.take().is_some() {
            debug!("session passphrase cache cleared");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<SealedPassphrase>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Seal plaintext with AES-256-GCM under the ephemeral session key.
fn seal(
    key: &[u8; SESSION_KEY_LEN],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; NONCE_LEN]), KeywardenError> {
    let unbound = UnboundKey::new(&AES_256_GCM, key)
        .map_err(|_| KeywardenError::Encryption("failed to create session cipher".to_string()))?;
    let sealing_key = LessSafeKey::new(unbound);

    let rng = SystemRandom::new();
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill(&mut nonce_bytes)
        .map_err(|_| KeywardenError::Encryption("failed to generate nonce".to_string()))?;
    let nonce = Nonce::assume_unique_for_key(nonce_bytes);

    let mut in_out = plaintext.to_vec();
    sealing_key
        .seal_in_place_append_tag(nonce, Aad::empty(), &mut in_out)
        .map_err(|_| KeywardenError::Encryption("failed to seal passphrase".to_string()))?;

    Ok((in_out, nonce_bytes))
}

/// Open a sealed blob. Fails on any tampering or key mismatch.
fn open(
    key: &[u8; SESSION_KEY_LEN],
    nonce_bytes: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, KeywardenError> {
    let unbound = UnboundKey::new(&AES_256_GCM, key)
        .map_err(|_| KeywardenError::Decryption("failed to create session cipher".to_string()))?;
    let opening_key = LessSafeKey::new(unbound);
    let nonce = Nonce::assume_unique_for_key(*nonce_bytes);

    let mut in_out = Zeroizing::new(ciphertext.to_vec());
    let plaintext_len = opening_key
        .open_in_place(nonce, Aad::empty(), in_out.as_mut_slice())
        .map_err(|_| KeywardenError::Decryption("sealed passphrase unreadable".to_string()))?
        .len();

    in_out.truncate(plaintext_len);
    Ok(in_out)
}
