//! Text processing utilities for tokenization

/// Lowercase `text` and split it into maximal runs of ASCII letters and digits.
///
/// Everything else (punctuation, whitespace, non-ASCII) is a separator.
/// The same routine is used for corpus documents and for queries.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Nerve cell");
        assert_eq!(tokens, vec!["nerve", "cell"]);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = tokenize("T-cell, CD4+ (activated)");
        assert_eq!(tokens, vec!["t", "cell", "cd4", "activated"]);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        let tokens = tokenize("xyz123 IL-2");
        assert_eq!(tokens, vec!["xyz123", "il", "2"]);
    }

    #[test]
    fn test_tokenize_non_ascii_is_separator() {
        // "ö" is not ASCII and splits the word
        let tokens = tokenize("Sjögren syndrome");
        assert_eq!(tokens, vec!["sj", "gren", "syndrome"]);
    }

    #[test]
    fn test_tokenize_keeps_stop_words() {
        let tokens = tokenize("cancer of the lung");
        assert_eq!(tokens, vec!["cancer", "of", "the", "lung"]);
    }

    #[test]
    fn test_tokenize_empty_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!!").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_repeats() {
        let tokens = tokenize("neuron \n neuron \n neuron");
        assert_eq!(tokens, vec!["neuron", "neuron", "neuron"]);
    }
}
