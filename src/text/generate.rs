use rand::{seq::SliceRandom, Rng};

/// Words used for generated test text.
pub const VOCABULARY: [&str; 10] = [
    "the", "and", "is", "in", "to", "of", "a", "that", "it", "with",
];

/// `count` words picked uniformly from [`VOCABULARY`].
pub fn generate_words(count: usize) -> Vec<String> {
    generate_words_with(&mut rand::thread_rng(), count)
}

/// Same as [`generate_words`] but with a caller-provided random number
/// generator, e.g. a seeded one for reproducible input.
pub fn generate_words_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .filter_map(|_| VOCABULARY.choose(rng))
        .map(|&word| word.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn length_and_vocabulary() {
        let words = generate_words(100);

        assert_eq!(words.len(), 100);
        assert!(words.iter().all(|word| VOCABULARY.contains(&word.as_str())));
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = generate_words_with(&mut StdRng::seed_from_u64(7), 50);
        let b = generate_words_with(&mut StdRng::seed_from_u64(7), 50);

        assert_eq!(a, b);
    }
}
