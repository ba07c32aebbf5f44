use std::collections::HashMap;

/// Number of occurrences of every distinct word.
pub fn count_frequency<S: AsRef<str>>(words: &[S]) -> HashMap<String, usize> {
    let mut frequency = HashMap::new();

    for word in words {
        *frequency.entry(word.as_ref().to_owned()).or_insert(0) += 1;
    }

    frequency
}

/// The `n` most frequent words, highest count first and ties in alphabetical
/// order.
pub fn most_frequent(frequency: &HashMap<String, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<_> = frequency
        .iter()
        .map(|(word, &count)| (word.as_str(), count))
        .collect();

    entries.sort_unstable_by(|(a_word, a_count), (b_word, b_count)| {
        b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
    });
    entries.truncate(n);

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let frequency = count_frequency(&["the", "cat", "the", "hat", "the", "cat"]);

        assert_eq!(frequency.len(), 3);
        assert_eq!(frequency["the"], 3);
        assert_eq!(frequency["cat"], 2);
        assert_eq!(frequency["hat"], 1);
    }

    #[test]
    fn top_words() {
        let frequency = count_frequency(&["b", "a", "c", "a", "b", "d"]);

        assert_eq!(most_frequent(&frequency, 3), [("a", 2), ("b", 2), ("c", 1)]);
        assert_eq!(most_frequent(&frequency, 10).len(), 4);
    }
}
