// SPDX-FileCopyrightText: 2026 Keywarden Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random password generation with strength scoring.

use keywarden_core::KeywardenError;
use ring::rand::{SecureRandom, SystemRandom};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse when read back (I/l/1, O/0).
const SIMILAR: &str = "Il1O0";

const MIN_LENGTH: usize = 6;
const MAX_LENGTH: usize = 128;

/// Which character classes to draw from and how long the output should be.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_similar: true,
        }
    }
}

impl From<&keywarden_config::GeneratorConfig> for GeneratorOptions {
    fn from(config: &keywarden_config::GeneratorConfig) -> Self {
        Self {
            length: config.length,
            uppercase: config.uppercase,
            lowercase: config.lowercase,
            digits: config.digits,
            symbols: config.symbols,
            exclude_similar: config.exclude_similar,
        }
    }
}

impl GeneratorOptions {
    fn charset(&self) -> Vec<char> {
        let mut charset = String::new();
        if self.uppercase {
            charset.push_str(UPPERCASE);
        }
        if self.lowercase {
            charset.push_str(LOWERCASE);
        }
        if self.digits {
            charset.push_str(DIGITS);
        }
        if self.symbols {
            charset.push_str(SYMBOLS);
        }

        charset
            .chars()
            .filter(|c| !self.exclude_similar || !SIMILAR.contains(*c))
            .collect()
    }

    fn enabled_classes(&self) -> usize {
        [self.uppercase, self.lowercase, self.digits, self.symbols]
            .into_iter()
            .filter(|enabled| *enabled)
            .count()
    }
}

/// Estimated strength of the passwords the given options produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// Scores options by length thresholds (8/12/16) plus character variety.
pub fn strength(options: &GeneratorOptions) -> Strength {
    let mut score = 0usize;
    if options.length >= 8 {
        score += 1;
    }
    if options.length >= 12 {
        score += 1;
    }
    if options.length >= 16 {
        score += 1;
    }
    score += options.enabled_classes().saturating_sub(1);

    match score {
        5.. => Strength::VeryStrong,
        4 => Strength::Strong,
        3 => Strength::Medium,
        _ => Strength::Weak,
    }
}

/// Generates a random password from the selected character classes.
///
/// Fails with `InvalidInput` when no class is selected or the length is out
/// of range, and with `Encryption` only if the system CSPRNG fails.
pub fn generate_password(options: &GeneratorOptions) -> Result<String, KeywardenError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(KeywardenError::InvalidInput(format!(
            "password length must be between {MIN_LENGTH} and {MAX_LENGTH}"
        )));
    }
    let charset = options.charset();
    if charset.is_empty() {
        return Err(KeywardenError::InvalidInput(
            "at least one character class must be selected".to_string(),
        ));
    }

    let rng = SystemRandom::new();
    let mut raw = vec![0u8; options.length * 4];
    rng.fill(&mut raw).map_err(|_| {
        KeywardenError::Encryption("failed to generate random password".to_string())
    })?;

    let password = raw
        .chunks_exact(4)
        .map(|chunk| {
            let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            charset[value as usize % charset.len()]
        })
        .collect();

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_the_requested_length() {
        let options = GeneratorOptions::default();
        let password = generate_password(&options).unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn draws_only_from_selected_classes() {
        let options = GeneratorOptions {
            length: 64,
            uppercase: false,
            lowercase: true,
            digits: true,
            symbols: false,
            exclude_similar: false,
        };
        let password = generate_password(&options).unwrap();
        assert!(password
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn similar_characters_are_excluded_by_default() {
        // 256 characters make a missed filter overwhelmingly likely to show.
        let options = GeneratorOptions {
            length: 128,
            ..Default::default()
        };
        for _ in 0..2 {
            let password = generate_password(&options).unwrap();
            assert!(password.chars().all(|c| !SIMILAR.contains(c)));
        }
    }

    #[test]
    fn empty_charset_is_rejected() {
        let options = GeneratorOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..Default::default()
        };
        let result = generate_password(&options);
        assert!(matches!(result, Err(KeywardenError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_length_is_rejected() {
        let too_short = GeneratorOptions {
            length: 3,
            ..Default::default()
        };
        assert!(generate_password(&too_short).is_err());

        let too_long = GeneratorOptions {
            length: 1000,
            ..Default::default()
        };
        assert!(generate_password(&too_long).is_err());
    }

    #[test]
    fn consecutive_passwords_differ() {
        let options = GeneratorOptions::default();
        let first = generate_password(&options).unwrap();
        let second = generate_password(&options).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn options_follow_the_configured_defaults() {
        let config = keywarden_config::GeneratorConfig::default();
        let options = GeneratorOptions::from(&config);
        assert_eq!(options.length, 16);
        assert!(options.exclude_similar);
        assert_eq!(strength(&options), Strength::VeryStrong);
    }

    #[test]
    fn strength_thresholds() {
        let defaults = GeneratorOptions::default();
        assert_eq!(strength(&defaults), Strength::VeryStrong);

        let short = GeneratorOptions {
            length: 6,
            uppercase: false,
            lowercase: true,
            digits: false,
            symbols: false,
            ..Default::default()
        };
        assert_eq!(strength(&short), Strength::Weak);

        let medium = GeneratorOptions {
            length: 12,
            uppercase: true,
            lowercase: true,
            digits: false,
            symbols: false,
            ..Default::default()
        };
        assert_eq!(strength(&medium), Strength::Medium);

        let strong = GeneratorOptions {
            length: 12,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
            ..Default::default()
        };
        assert_eq!(strength(&strong), Strength::Strong);
    }
}
