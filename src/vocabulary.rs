//! The words text is built from.

use std::{fs, path::Path, sync::OnceLock};

use crate::error::{Error, Result};

const BUNDLED_WORDS: &str = include_str!("../data/words.txt");
const BUNDLED_STARTERS: &str = include_str!("../data/starters.txt");

/// Two word sets: ordinary words, and capitalized words that open a paragraph.
///
/// Both sets are guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    starters: Vec<String>,
}

impl Vocabulary {
    /// Creates a vocabulary from two word lists. Fails if either is empty.
    pub fn new(words: Vec<String>, starters: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyVocabulary("words"));
        }
        if starters.is_empty() {
            return Err(Error::EmptyVocabulary("starter words"));
        }
        Ok(Self { words, starters })
    }

    /// The vocabulary shipped with the crate. Parsed on first use.
    pub fn bundled() -> &'static Self {
        static BUNDLED: OnceLock<Vocabulary> = OnceLock::new();
        BUNDLED.get_or_init(|| Self {
            words: parse_list(BUNDLED_WORDS),
            starters: parse_list(BUNDLED_STARTERS),
        })
    }

    /// Reads a vocabulary from two files with one word per line. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn from_paths(words: &Path, starters: &Path) -> Result<Self> {
        Self::new(Self::read_list(words)?, Self::read_list(starters)?)
    }

    /// Reads a single word list in the same format as [`Vocabulary::from_paths`].
    pub(crate) fn read_list(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|source| Error::Vocabulary {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parse_list(&content))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn starters(&self) -> &[String] {
        &self.starters
    }
}

fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::error::Error;

    use super::{parse_list, Vocabulary};

    #[test]
    fn bundled_is_not_empty() {
        let v = Vocabulary::bundled();
        assert!(!v.words().is_empty());
        assert!(!v.starters().is_empty());
    }

    #[test]
    fn bundled_words_are_lowercase() {
        for w in Vocabulary::bundled().words() {
            assert_eq!(w, &w.to_lowercase(), "'{w}' is not lowercase");
        }
    }

    #[test]
    fn bundled_starters_are_capitalized() {
        for w in Vocabulary::bundled().starters() {
            let first = w.chars().next().unwrap();
            assert!(first.is_uppercase(), "'{w}' is not capitalized");
        }
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let list = parse_list("# header\n\nfoo\n  bar  \n#baz\n");
        assert_eq!(list, vec!["foo".to_string(), "bar".to_string()]);
    }

    #[test]
    fn empty_lists_are_rejected() {
        match Vocabulary::new(vec![], vec!["A".into()]) {
            Err(Error::EmptyVocabulary(_)) => {}
            other => panic!("expected empty vocabulary error, got {other:?}"),
        }
        match Vocabulary::new(vec!["a".into()], vec![]) {
            Err(Error::EmptyVocabulary(_)) => {}
            other => panic!("expected empty vocabulary error, got {other:?}"),
        }
    }

    #[test]
    fn reads_from_files() {
        let mut words = NamedTempFile::new().unwrap();
        writeln!(words, "alpha\nbeta").unwrap();
        let mut starters = NamedTempFile::new().unwrap();
        writeln!(starters, "# starters\nGamma").unwrap();

        let v = Vocabulary::from_paths(words.path(), starters.path()).unwrap();
        assert_eq!(v.words(), ["alpha".to_string(), "beta".to_string()]);
        assert_eq!(v.starters(), ["Gamma".to_string()]);
    }

    #[test]
    fn missing_file_is_reported() {
        let starters = NamedTempFile::new().unwrap();
        let missing = starters.path().with_extension("does-not-exist");
        match Vocabulary::from_paths(&missing, starters.path()) {
            Err(Error::Vocabulary { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
