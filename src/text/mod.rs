//! Algorithms sorting word sequences, plus the helpers that turn raw text
//! into words and report on the result.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    error::UnknownAlgorithm,
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
};

pub use self::{
    frequency::{count_frequency, most_frequent},
    generate::{generate_words, generate_words_with, VOCABULARY},
    quick::{compare_words, WordQuickSort},
    radix::WordRadixSort,
    tokenize::split_words,
};

mod frequency;
mod generate;
mod quick;
mod radix;
mod tokenize;

/// Any of the word algorithms, selectable at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextAlgorithm {
    Quick,
    Radix,
}

impl TextAlgorithm {
    pub const ALL: [Self; 2] = [Self::Quick, Self::Radix];

    pub const fn descriptor(self) -> Descriptor {
        match self {
            Self::Quick => WordQuickSort::DESCRIPTOR,
            Self::Radix => WordRadixSort::DESCRIPTOR,
        }
    }

    /// Short identifier as accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Radix => "radix",
        }
    }

    /// Sort `words` in place with the selected algorithm.
    pub async fn sort<O>(
        self,
        words: &mut [String],
        options: &SortOptions,
        observer: &mut O,
    ) -> Outcome
    where
        O: Observer<String> + ?Sized,
    {
        match self {
            Self::Quick => WordQuickSort.sort(words, options, observer).await,
            Self::Radix => WordRadixSort.sort(words, options, observer).await,
        }
    }

    /// Ordering the algorithm sorts by.
    ///
    /// [`Quick`](Self::Quick) orders by [`compare_words`].
    /// [`Radix`](Self::Radix) orders by letter position, where every
    /// non-letter and every position past the end of a word ranks first.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Quick => compare_words(a, b),
            Self::Radix => radix::compare_letters(a, b),
        }
    }

    /// Position of the first word that is smaller than its predecessor under
    /// [`compare`](Self::compare), or `None` if the words are in the order
    /// this algorithm produces.
    ///
    /// ```
    /// use sort_trace::TextAlgorithm;
    ///
    /// assert_eq!(TextAlgorithm::Quick.first_unsorted(&["apple", "3rd"]), None);
    /// assert_eq!(TextAlgorithm::Radix.first_unsorted(&["a1", "a0"]), None);
    /// assert_eq!(TextAlgorithm::Radix.first_unsorted(&["b", "a"]), Some(1));
    /// ```
    pub fn first_unsorted<S: AsRef<str>>(self, words: &[S]) -> Option<usize> {
        first_out_of_order(words, |a, b| self.compare(a, b))
    }
}

impl FromStr for TextAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

impl fmt::Display for TextAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

/// Position of the first word that is smaller than its predecessor when
/// compared case-insensitively, or `None` if the words are in order.
///
/// This is plain ordinal order. Use [`TextAlgorithm::first_unsorted`] to
/// check the output of a specific algorithm.
///
/// ```
/// use sort_trace::text::first_unsorted;
///
/// assert_eq!(first_unsorted(&["a", "B", "c"]), None);
/// assert_eq!(first_unsorted(&["a", "c", "b"]), Some(2));
/// ```
pub fn first_unsorted<S: AsRef<str>>(words: &[S]) -> Option<usize> {
    first_out_of_order(words, quick::compare_ignore_case)
}

fn first_out_of_order<S, F>(words: &[S], cmp: F) -> Option<usize>
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> Ordering,
{
    words
        .windows(2)
        .position(|pair| cmp(pair[0].as_ref(), pair[1].as_ref()).is_gt())
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_from_str() {
        assert_eq!("QUICK".parse(), Ok(TextAlgorithm::Quick));
        assert!("bubble".parse::<TextAlgorithm>().is_err());
    }

    #[test]
    fn unsorted_position() {
        let words: [&str; 0] = [];
        assert_eq!(first_unsorted(&words), None);
        assert_eq!(first_unsorted(&["b", "a"]), Some(1));
        assert_eq!(first_unsorted(&["Apple".to_owned(), "apple".to_owned()]), None);
    }

    #[test]
    fn quick_order_puts_digits_last() {
        let words = ["apple", "Banana", "3rd", "42"];

        assert_eq!(TextAlgorithm::Quick.first_unsorted(&words), None);
        assert_eq!(TextAlgorithm::Quick.first_unsorted(&["3rd", "apple"]), Some(1));
        assert_eq!(first_unsorted(&words), Some(2));
    }

    #[test]
    fn radix_order_ignores_non_letters() {
        let words = ["a1", "a0", "A", "ab", "b9c"];

        assert_eq!(TextAlgorithm::Radix.first_unsorted(&words), None);
        assert_eq!(TextAlgorithm::Radix.first_unsorted(&["ab", "a1"]), Some(1));
        assert_eq!(first_unsorted(&words), Some(1));
    }

    #[test]
    fn sorted_output_passes_own_check() {
        use futures::executor::block_on;

        for algorithm in TextAlgorithm::ALL {
            let mut words = split_words("Zeta 3rd apple a1 a0 2nd Beta");
            let options = SortOptions::new().delay_ms(0);
            let outcome = block_on(algorithm.sort(&mut words, &options, &mut ()));

            assert!(outcome.is_completed(), "{algorithm}");
            assert_eq!(algorithm.first_unsorted(&words), None, "{algorithm}: {words:?}");
        }
    }
}
