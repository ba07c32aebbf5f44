use std::{cmp::Ordering, fmt::Write};

use crate::{
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
    tracer::{Step, Tracer},
    util::permute::Rearrange,
};

/// Bucket 0 collects words that are too short or hold a non-letter at the
/// current position, buckets 1 to 26 the letters `a` to `z`.
const BUCKETS: usize = 27;

/// Snapshots are published after this many placed words.
const UPDATE_EVERY: usize = 10;

/// Letter-by-letter bucket sort, from the last position to the first.
///
/// Letters are compared case-insensitively, every other character counts as
/// "no letter" and sorts first. Array updates are published in batches of
/// ten placed words, and at the end of each pass unless the last batch
/// already covered it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WordRadixSort;

impl WordRadixSort {
    pub const DESCRIPTOR: Descriptor = Descriptor::new(
        "Radix sort for text",
        "Sort words letter by letter, starting from the last letter.",
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

        tracer.finish(result, "Radix sort complete")
    }
}

async fn run<O>(words: &mut [String], tracer: &mut Tracer<'_, String, O>) -> Step
where
    O: Observer<String> + ?Sized,
{
    if !tracer.begin(words, "Starting radix sort on text")? {
        return Ok(());
    }

    let max_len = words
        .iter()
        .map(|word| word.chars().count())
        .max()
        .unwrap_or(0);

    tracer.narrate(&format!("Longest word: {max_len} letters"));

    for position in (0..max_len).rev() {
        let buckets = distribute(words, position);

        tracer.narrate(&summary(&buckets, position));

        let order = buckets.concat();
        let mut rearrange = Rearrange::new(order);

        for k in 0..words.len() {
            rearrange.place(words, k);

            if (k + 1) % UPDATE_EVERY == 0 {
                tracer.updated(words);
                tracer.pause().await?;
            }
        }

        // A full final batch was already published
        if words.len() % UPDATE_EVERY != 0 {
            tracer.updated(words);
            tracer.pause().await?;
        }
    }

    Ok(())
}

fn bucket(word: &str, position: usize) -> usize {
    rank(word.chars().nth(position))
}

fn rank(c: Option<char>) -> usize {
    match c {
        Some(c) if c.is_ascii_alphabetic() => {
            usize::from(c.to_ascii_lowercase() as u8 - b'a') + 1
        }
        _ => 0,
    }
}

/// Ordering produced by [`WordRadixSort`]: words compare by the bucket of
/// each position in turn.
pub(crate) fn compare_letters(a: &str, b: &str) -> Ordering {
    let mut a = a.chars();
    let mut b = b.chars();

    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (a, b) => match rank(a).cmp(&rank(b)) {
                Ordering::Equal => {}
                unequal => return unequal,
            },
        }
    }
}

/// Indices of `words` grouped by their letter at `position`, each bucket in
/// the words' current relative order.
fn distribute(words: &[String], position: usize) -> [Vec<usize>; BUCKETS] {
    let mut buckets: [Vec<usize>; BUCKETS] = std::array::from_fn(|_| Vec::new());

    for (idx, word) in words.iter().enumerate() {
        buckets[bucket(word, position)].push(idx);
    }

    buckets
}

fn summary(buckets: &[Vec<usize>; BUCKETS], position: usize) -> String {
    let mut summary = format!("Letter {}:", position + 1);

    for (idx, bucket) in buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }

        let label = if idx == 0 {
            '_'
        } else {
            char::from(b'a' + idx as u8 - 1)
        };

        let _ = write!(summary, " {label}={}", bucket.len());
    }

    summary
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::EventLog;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|&word| word.to_owned()).collect()
    }

    fn sort(data: &mut [String]) -> EventLog<String> {
        let mut log = EventLog::new();
        let options = SortOptions::new().delay_ms(0);
        let outcome = block_on(WordRadixSort.sort(data, &options, &mut log));
        assert!(outcome.is_completed());

        log
    }

    #[test]
    fn short_words_first() {
        let mut data = words(&["bb", "a", "ccc"]);
        let log = sort(&mut data);

        assert_eq!(data, ["a", "bb", "ccc"]);
        assert_eq!(
            log.messages()
                .filter(|msg| msg.starts_with("Letter"))
                .collect::<Vec<_>>(),
            ["Letter 3: _=2 c=1", "Letter 2: _=1 b=1 c=1", "Letter 1: a=1 b=1 c=1"]
        );
    }

    #[test]
    fn case_insensitive() {
        let mut data = words(&["Banana", "apple", "cherry", "Apricot"]);
        let _ = sort(&mut data);

        assert_eq!(data, ["apple", "Apricot", "Banana", "cherry"]);
    }

    #[test]
    fn non_letters_share_bucket() {
        assert_eq!(bucket("a1", 1), 0);
        assert_eq!(bucket("a", 1), 0);
        assert_eq!(bucket("aZ", 1), 26);
        assert_eq!(bucket("é", 0), 0);
    }

    #[test]
    fn batched_updates() {
        let mut data: Vec<String> = (0..25)
            .map(|i| if i % 2 == 0 { "b" } else { "a" }.to_owned())
            .collect();
        let log = sort(&mut data);

        // One pass: after 10, after 20, and at the end
        assert_eq!(log.snapshots().count(), 3);
    }

    #[test]
    fn full_batch_ends_pass() {
        let mut data: Vec<String> = (0..10)
            .map(|i| if i % 2 == 0 { "b" } else { "a" }.to_owned())
            .collect();
        let log = sort(&mut data);

        let snapshots: Vec<_> = log.snapshots().collect();

        assert_eq!(snapshots.len(), 1);
        assert!(snapshots[0].iter().take(5).all(|word| word == "a"));
    }

    #[test]
    fn letter_order() {
        assert_eq!(compare_letters("a1", "a0"), Ordering::Equal);
        assert_eq!(compare_letters("a", "a-"), Ordering::Equal);
        assert_eq!(compare_letters("A", "ab"), Ordering::Less);
        assert_eq!(compare_letters("Zed", "apple"), Ordering::Greater);
    }
}
