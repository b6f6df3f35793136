//! Guess scoring
//!
//! Each guessed letter is classified against the secret word:
//! - Exact: right letter, right position
//! - Present: letter occurs elsewhere and still has unclaimed occurrences
//! - Absent: letter has no occurrences left to claim
//!
//! A letter value can be credited at most as many times as it occurs in the
//! secret word. Exact matches claim credit first; the remaining credit goes to
//! misplaced copies from left to right.

use super::Pallet;
use rustc_hash::FxHashMap;
use std::fmt;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Exact,
    Present,
    Absent,
}

impl Classification {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One position of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredLetter {
    pub value: char,
    pub position: usize,
    pub classification: Classification,
}

/// Feedback for a whole guess, one `ScoredLetter` per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score(Vec<ScoredLetter>);

impl Score {
    /// Score `guess` against the secret held by `pallet`
    ///
    /// Pure: the Pallet is only queried. `guess` must already be normalized
    /// and the same length as the Pallet; extra or missing positions are
    /// scored as far as the guess goes.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and charge them to their letter's budget
    /// 2. Second pass: left to right, a non-exact letter is Present while its
    ///    letter still has budget, Absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordie::core::{Classification::*, Pallet, Score};
    ///
    /// let pallet = Pallet::new("those").unwrap();
    /// let guess: Vec<char> = "geese".chars().collect();
    /// let score = Score::calculate(&pallet, &guess);
    ///
    /// // Both exact e/s claim the secret's only copies, so the early e's get nothing
    /// assert_eq!(
    ///     score.classifications(),
    ///     vec![Absent, Absent, Absent, Exact, Exact]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(pallet: &Pallet, guess: &[char]) -> Self {
        let mut result = vec![Classification::Absent; guess.len()];
        let mut consumed: FxHashMap<char, usize> = FxHashMap::default();

        // First pass: exact matches
        for (i, &letter) in guess.iter().enumerate() {
            if pallet.search(letter).contains(i) {
                result[i] = Classification::Exact;
                *consumed.entry(letter).or_insert(0) += 1;
            }
        }

        // Second pass: misplaced letters from whatever budget is left
        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == Classification::Exact {
                continue;
            }

            let count = pallet.search(letter).count();
            let used = consumed.entry(letter).or_insert(0);
            if *used < count {
                result[i] = Classification::Present;
            }
            *used += 1;
        }

        Self(
            guess
                .iter()
                .zip(result)
                .enumerate()
                .map(|(position, (&value, classification))| ScoredLetter {
                    value,
                    position,
                    classification,
                })
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[ScoredLetter] {
        &self.0
    }

    #[must_use]
    pub fn classifications(&self) -> Vec<Classification> {
        self.0.iter().map(|letter| letter.classification).collect()
    }

    /// Positions scored Exact, ascending
    pub fn exact_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .filter(|letter| letter.classification == Classification::Exact)
            .map(|letter| letter.position)
    }

    /// Every position Exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|letter| letter.classification == Classification::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Classification::Exact)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Classification::Present)
    }

    fn count(&self, classification: Classification) -> usize {
        self.0
            .iter()
            .filter(|letter| letter.classification == classification)
            .count()
    }

    /// Colorless summary like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|letter| letter.classification.emoji())
            .collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Exact, Present};
    use super::*;

    fn score(secret: &str, guess: &str) -> Score {
        let pallet = Pallet::new(secret).unwrap();
        let guess: Vec<char> = guess.chars().collect();
        Score::calculate(&pallet, &guess)
    }

    #[test]
    fn score_all_absent() {
        let s = score("fghij", "abcde");

        assert_eq!(s.classifications(), vec![Absent; 5]);
        assert_eq!(s.count_exact(), 0);
        assert_eq!(s.count_present(), 0);
    }

    #[test]
    fn score_all_exact() {
        let s = score("crane", "crane");

        assert!(s.is_perfect());
        assert_eq!(s.count_exact(), 5);
        assert_eq!(s.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn score_real_wordle_example() {
        // CRANE vs SLATE: R is absent because SLATE has no R
        let s = score("slate", "crane");

        assert_eq!(s.classifications(), vec![Absent, Absent, Exact, Absent, Exact]);
    }

    #[test]
    fn score_duplicate_letters_both_present() {
        // ERASE has two E's, so both misplaced E's in SPEED are credited
        let s = score("erase", "speed");

        assert_eq!(
            s.classifications(),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn score_duplicate_letters_secret_has_two() {
        let s = score("speed", "erase");

        assert_eq!(
            s.classifications(),
            vec![Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn score_duplicate_letters_exact_and_present() {
        // ROBOT vs FLOOR: the second O is exact, the first O takes the other copy
        let s = score("floor", "robot");

        assert_eq!(
            s.classifications(),
            vec![Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn score_excess_copies_absent() {
        // ALLOW vs LLAMA: second L is exact, first L takes the remaining L,
        // first A takes the only A, last A has nothing left
        let s = score("allow", "llama");

        assert_eq!(
            s.classifications(),
            vec![Present, Exact, Present, Absent, Absent]
        );
    }

    #[test]
    fn score_later_exact_claims_before_earlier_misplaced() {
        let s = score("those", "geese");

        assert_eq!(s.classifications(), vec![Absent, Absent, Absent, Exact, Exact]);
        assert_eq!(s.to_emoji(), "⬜⬜⬜🟩🟩");
    }

    #[test]
    fn score_secret_with_more_copies_gives_no_bonus() {
        let s = score("eerie", "there");

        assert_eq!(
            s.classifications(),
            vec![Absent, Absent, Present, Present, Exact]
        );
    }

    #[test]
    fn score_keeps_letters_and_positions() {
        let s = score("slate", "crane");

        assert_eq!(s.to_string(), "crane");
        for (i, letter) in s.letters().iter().enumerate() {
            assert_eq!(letter.position, i);
        }
        assert_eq!(s.exact_positions().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn empty_score_is_not_perfect() {
        let pallet = Pallet::new("a").unwrap();
        assert!(!Score::calculate(&pallet, &[]).is_perfect());
    }
}
