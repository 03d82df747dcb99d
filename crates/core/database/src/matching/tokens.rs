use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Words too common to say anything about an item
pub static STOPWORDS: [&str; 11] = [
    "the", "a", "an", "and", "or", "with", "of", "in", "on", "for", "to",
];

static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z0-9]+").unwrap());

/// Split free text into its set of meaningful lowercase words
pub fn tokenize<'a>(text: impl Into<Option<&'a str>>) -> HashSet<String> {
    let Some(text) = text.into() else {
        return HashSet::new();
    };

    let text = text.to_lowercase();
    RE_WORD
        .find_iter(&text)
        .map(|word| word.as_str())
        .filter(|word| word.len() > 1 && !STOPWORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity of two token sets
pub fn overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{overlap, tokenize};

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(None).is_empty());
        assert!(tokenize("  !! ?? ").is_empty());
    }

    #[test]
    fn drops_short_words_and_stopwords() {
        assert_eq!(
            tokenize("The Black iPhone-12 with a cracked screen, in Room B"),
            set(&["black", "iphone", "12", "cracked", "screen", "room"])
        );
    }

    #[test]
    fn idempotent_on_tokens() {
        let tokens = tokenize("blue water bottle hydroflask");
        let joined = tokens.iter().cloned().collect::<Vec<String>>().join(" ");
        assert_eq!(tokenize(joined.as_str()), tokens);
    }

    #[test]
    fn jaccard() {
        let a = set(&["apple", "iphone"]);
        let b = set(&["apple", "samsung"]);

        assert!((overlap(&a, &b) - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(overlap(&a, &a), 1.0);
        assert_eq!(overlap(&a, &HashSet::new()), 0.0);
        assert_eq!(overlap(&HashSet::new(), &HashSet::new()), 0.0);
    }
}
