use std::cmp::Ordering;

use crate::{
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
    numeric::quick::quick_sort,
    tracer::{Step, Tracer},
};

/// Quicksort over words ordered by [`compare_words`].
///
/// Shares its partition scheme with [`QuickSort`](crate::numeric::QuickSort).
/// Per-step log messages are omitted for sequences reaching the configured
/// [`verbose_limit`](SortOptions::verbose_limit).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WordQuickSort;

impl WordQuickSort {
    pub const DESCRIPTOR: Descriptor = Descriptor::new(
        "Quick sort for text",
        "Quick sort that puts words in alphabetical order.",
    );

    /// Sort `words` in place while reporting to `observer`.
    pub async fn sort<O>(
        &self,
        words: &mut [String],
        options: &SortOptions,
        observer: &mut O,
    ) -> Outcome
    where
        O: Observer<String> + ?Sized,
    {
        let mut tracer = Tracer::new(Self::DESCRIPTOR, options, observer).for_words(words.len());
        let result = run(words, &mut tracer).await;

        tracer.finish(result, "Text sorted")
    }
}

async fn run<O>(words: &mut [String], tracer: &mut Tracer<'_, String, O>) -> Step
where
    O: Observer<String> + ?Sized,
{
    if !tracer.begin(words, "Starting quick sort on text")? {
        return Ok(());
    }

    quick_sort(words, tracer, |a, b| compare_words(a, b)).await
}

/// Word ordering used by [`WordQuickSort`].
///
/// A word starting with a digit sorts after a word that doesn't, regardless
/// of the remaining characters. Otherwise words compare by their characters
/// folded to upper case.
///
/// ```
/// use std::cmp::Ordering;
/// use sort_trace::text::compare_words;
///
/// assert_eq!(compare_words("3c", "b1"), Ordering::Greater);
/// assert_eq!(compare_words("Apple", "apple"), Ordering::Equal);
/// assert_eq!(compare_words("a2", "b1"), Ordering::Less);
/// ```
pub fn compare_words(a: &str, b: &str) -> Ordering {
    match (starts_with_digit(a), starts_with_digit(b)) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => compare_ignore_case(a, b),
    }
}

fn starts_with_digit(word: &str) -> bool {
    word.chars().next().map_or(false, |c| c.is_ascii_digit())
}

/// Case-insensitive ordinal comparison.
pub(crate) fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let a = a.chars().flat_map(char::to_uppercase);
    let b = b.chars().flat_map(char::to_uppercase);

    a.cmp(b)
}
