//! Positional record of the secret word
//!
//! A Pallet stores one `Letter` per code point of the secret word and tracks
//! which positions the player has already placed correctly.

use super::PalletError;
use rustc_hash::FxHashMap;

/// A single tile of the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    value: char,
    position: usize,
    revealed: bool,
}

impl Letter {
    #[inline]
    #[must_use]
    pub const fn value(&self) -> char {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether a guess has placed this letter at its exact position
    #[inline]
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Result of looking a code point up in the Pallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matches<'a> {
    positions: &'a [usize],
}

impl<'a> Matches<'a> {
    /// Whether the code point occurs anywhere in the secret word
    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Every position holding the code point, strictly ascending
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &'a [usize] {
        self.positions
    }

    /// Number of occurrences in the secret word
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        // Sorted by construction
        self.positions.binary_search(&position).is_ok()
    }
}

/// The secret word split into positioned letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pallet {
    letters: Vec<Letter>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

impl Pallet {
    /// Build a Pallet from the secret word, all letters unrevealed
    ///
    /// # Errors
    /// Returns `PalletError::InvalidWord` if `word` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordie::core::Pallet;
    ///
    /// let pallet = Pallet::new("speed").unwrap();
    /// assert_eq!(pallet.len(), 5);
    /// assert_eq!(pallet.search('e').positions(), &[2, 3]);
    /// assert!(Pallet::new("").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Self, PalletError> {
        if word.is_empty() {
            return Err(PalletError::InvalidWord);
        }

        let letters: Vec<Letter> = word
            .chars()
            .enumerate()
            .map(|(position, value)| Letter {
                value,
                position,
                revealed: false,
            })
            .collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for letter in &letters {
            char_positions
                .entry(letter.value)
                .or_default()
                .push(letter.position);
        }

        Ok(Self {
            letters,
            char_positions,
        })
    }

    /// Number of tiles, which is also the required guess length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed Pallet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Find every position holding `value`
    #[must_use]
    pub fn search(&self, value: char) -> Matches<'_> {
        let positions = self
            .char_positions
            .get(&value)
            .map_or(&[][..], Vec::as_slice);
        Matches { positions }
    }

    /// Mark the letter at `position` as placed. Out-of-range positions are ignored.
    pub fn reveal(&mut self, position: usize) {
        if let Some(letter) = self.letters.get_mut(position) {
            letter.revealed = true;
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(Letter::is_revealed)
    }

    /// Board view: revealed letters as `Some`, the rest blank
    #[must_use]
    pub fn render(&self) -> Vec<Option<char>> {
        self.letters
            .iter()
            .map(|letter| letter.revealed.then_some(letter.value))
            .collect()
    }
}
