//! This module contains the types used for configuration.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    generator::{Request, DEFAULT_AVG_WORDS_PER_SENTENCE},
    valence::ValenceSetting,
    vocabulary::Vocabulary,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub punctuation: PunctuationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        let mut dir = home::home_dir()?;
        dir.push(".config/ipsum/config.toml");
        Some(dir)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let toml = std::fs::read_to_string(path).ok()?;
        toml::from_str(&toml).ok()
    }

    pub fn read_from_default_path() -> Option<Self> {
        Self::from_path(&Self::default_path()?)
    }

    /// The valence to use: the environment wins over the file.
    pub fn valence_setting(&self) -> ValenceSetting {
        ValenceSetting::from_env().unwrap_or_else(|| self.punctuation.valence.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of paragraphs to generate.
    #[serde(default = "default_paragraphs")]
    pub paragraphs: usize,

    /// Sentences per paragraph. Empty means a random count for each paragraph, a single value is
    /// used for all paragraphs.
    #[serde(default)]
    pub sentences: Vec<usize>,

    #[serde(default = "default_avg_words")]
    pub avg_words_per_sentence: f64,

    /// File with one word per line replacing the bundled words. Empty uses the bundled ones.
    #[serde(default)]
    pub words_path: String,

    /// Like `words_path`, but for the capitalized words opening each paragraph.
    #[serde(default)]
    pub starters_path: String,

    /// Seed for the random source. `0` seeds from system entropy.
    #[serde(default)]
    pub seed: u64,
}

fn default_paragraphs() -> usize {
    1
}

fn default_avg_words() -> f64 {
    DEFAULT_AVG_WORDS_PER_SENTENCE
}

impl GeneratorConfig {
    /// Builds a validated [`Request`] from these settings.
    pub fn request(&self) -> Result<Request> {
        let sentences = if self.sentences.is_empty() {
            None
        } else {
            Some(self.sentences.clone())
        };
        Request::new(self.paragraphs, sentences, self.avg_words_per_sentence)
    }

    /// Loads the configured vocabulary, or borrows the bundled one if no custom files are set.
    ///
    /// Both paths must be set for a custom vocabulary. A single one falls back to the bundled
    /// list for the other set.
    pub fn vocabulary(&self) -> Result<Cow<'static, Vocabulary>> {
        if self.words_path.is_empty() && self.starters_path.is_empty() {
            return Ok(Cow::Borrowed(Vocabulary::bundled()));
        }

        let bundled = Vocabulary::bundled();
        let words = if self.words_path.is_empty() {
            bundled.words().to_vec()
        } else {
            Vocabulary::read_list(Path::new(&self.words_path))?
        };
        let starters = if self.starters_path.is_empty() {
            bundled.starters().to_vec()
        } else {
            Vocabulary::read_list(Path::new(&self.starters_path))?
        };

        Ok(Cow::Owned(Vocabulary::new(words, starters)?))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            paragraphs: default_paragraphs(),
            sentences: Vec::new(),
            avg_words_per_sentence: default_avg_words(),
            words_path: String::new(),
            starters_path: String::new(),
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PunctuationConfig {
    /// Density of commas, colons, semicolons and dashes, from 0 to 1. `false` disables them.
    /// Overridden by the `IPSUM_PUNCTUATION_VALENCE` environment variable.
    #[serde(default)]
    pub valence: ValenceSetting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Most verbose level to log: one of `trace`, `debug`, `info`, `warn`, `error` or `off`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Human-friendly multi-line logs on stderr.
    #[serde(default)]
    pub print_pretty_logs: bool,

    /// Do not log to stderr at all.
    #[serde(default)]
    pub no_stdout: bool,

    /// File to append JSON logs to. Empty disables file logging.
    #[serde(default)]
    pub output_path: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            print_pretty_logs: false,
            no_stdout: false,
            output_path: String::new(),
        }
    }
}
