// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-identity `SessionAuth` for tests.

use keywarden_core::SessionAuth;
use secrecy::SecretString;

/// A session collaborator with a fixed identity and bearer credential.
pub struct StaticSession {
    identity: String,
    token: String,
}

impl StaticSession {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            token: "test-bearer-token".to_string(),
        }
    }

    pub fn with_token(identity: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            token: token.into(),
        }
    }
}

impl SessionAuth for StaticSession {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn bearer_token(&self) -> SecretString {
        SecretString::from(self.token.clone())
    }
}
