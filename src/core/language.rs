use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::LanguageCodeError;

/// A normalized language identifier such as `en`, `mn` or `pt-br`.
///
/// Parsing trims whitespace, lowercases, and converts `_` to `-`
/// (so `"EN_us"` becomes `"en-us"`). A valid code is one or more
/// ASCII alphanumeric subtags joined by `-`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn parse(raw: &str) -> Result<Self, LanguageCodeError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(LanguageCodeError::Empty);
        }

        let well_formed = normalized
            .split('-')
            .all(|tag| !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric()));
        if !well_formed {
            return Err(LanguageCodeError::Malformed(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().replace('_', "-").to_ascii_lowercase()
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
