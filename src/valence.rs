//! Punctuation valence: how much internal punctuation gets sprinkled into sentences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`ValenceSetting::from_env`].
pub const VALENCE_ENV: &str = "IPSUM_PUNCTUATION_VALENCE";

/// Valence used when nothing (or something unusable) is configured.
pub const DEFAULT_VALENCE: f64 = 0.4;

/// A valence as written by a user, before it is checked.
///
/// In TOML this is either a boolean (`false` disables punctuation, `true` means the default), a
/// number or, erroneously, anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValenceSetting {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// A checked valence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Valence {
    /// No internal punctuation at all.
    Disabled,
    /// A density in `[0, 1]`.
    Density(f64),
}

/// Returned when a [`ValenceSetting`] cannot be used.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidValence(pub ValenceSetting);

impl fmt::Display for InvalidValence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "punctuation valence must be a number between 0 and 1 or a boolean, got {}",
            self.0
        )
    }
}

impl std::error::Error for InvalidValence {}

impl fmt::Display for ValenceSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl Default for ValenceSetting {
    fn default() -> Self {
        Self::Number(DEFAULT_VALENCE)
    }
}

impl Default for Valence {
    fn default() -> Self {
        Self::Density(DEFAULT_VALENCE)
    }
}

impl ValenceSetting {
    /// Reads the setting from [`VALENCE_ENV`], or `None` if it is unset.
    ///
    /// This is read anew on every call.
    pub fn from_env() -> Option<Self> {
        std::env::var(VALENCE_ENV).ok().map(|v| Self::parse(&v))
    }

    /// Interprets free text, such as an environment variable or a CLI flag.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "true" | "on" => Self::Flag(true),
            "false" | "off" => Self::Flag(false),
            lower => match lower.parse::<f64>() {
                Ok(n) => Self::Number(n),
                Err(_) => Self::Text(trimmed.to_owned()),
            },
        }
    }

    pub fn resolve(&self) -> Result<Valence, InvalidValence> {
        match self {
            Self::Flag(false) => Ok(Valence::Disabled),
            Self::Flag(true) => Ok(Valence::default()),
            Self::Number(n) if (0.0..=1.0).contains(n) => Ok(Valence::Density(*n)),
            _ => Err(InvalidValence(self.clone())),
        }
    }

    /// Like [`ValenceSetting::resolve`], but falls back to [`DEFAULT_VALENCE`] instead of
    /// failing. A warning is logged if `warn` is set.
    pub fn resolve_or_default(&self, warn: bool) -> Valence {
        self.resolve().unwrap_or_else(|e| {
            if warn {
                tracing::warn!("{e}, using {DEFAULT_VALENCE} instead");
            }
            Valence::default()
        })
    }
}
