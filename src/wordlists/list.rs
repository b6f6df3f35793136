//! In-memory dictionary
//!
//! A sorted, de-duplicated list of normalized words that supplies secrets and
//! answers vocabulary lookups.

use super::{WORDS, WordListError, WordSource};
use crate::core::normalize;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Immutable dictionary built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from raw entries
    ///
    /// Entries are normalized the same way guesses are; blank entries and
    /// duplicates are dropped.
    ///
    /// # Examples
    /// ```
    /// use wordie::wordlists::{WordList, WordSource};
    ///
    /// let list = WordList::new(["Crane", " slate ", "", "crane"]);
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("crane"));
    /// ```
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = entries
            .into_iter()
            .map(|entry| normalize(entry.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        words.sort_unstable();
        words.dedup();

        Self { words }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(WORDS)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick a secret of `length` code points using the given RNG
    ///
    /// # Errors
    /// Returns `WordListError::NoWordsOfLength` if no entry has that length.
    pub fn pick_secret_with<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<String, WordListError> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|word| word.chars().count() == length)
            .collect();

        candidates
            .choose(rng)
            .map(|&word| word.clone())
            .ok_or(WordListError::NoWordsOfLength(length))
    }
}

impl WordSource for WordList {
    fn pick_secret(&self, length: usize) -> Result<String, WordListError> {
        self.pick_secret_with(length, &mut rand::rng())
    }

    fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }
}
