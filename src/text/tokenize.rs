/// Split raw text into lower-cased words with punctuation removed.
///
/// Characters that are neither alphanumeric, `_`, nor whitespace are dropped
/// before splitting, so `"don't"` turns into `"dont"`.
///
/// ```
/// use sort_trace::text::split_words;
///
/// assert_eq!(split_words("Hello, World!\nIt's\tme."), ["hello", "world", "its", "me"]);
/// ```
pub fn split_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::split_words;

    #[test]
    fn empty() {
        assert!(split_words("").is_empty());
        assert!(split_words(" ,.; \n").is_empty());
    }

    #[test]
    fn keeps_digits_and_unicode() {
        assert_eq!(split_words("Привет, 3rd_place!"), ["привет", "3rd_place"]);
    }
}
