use crate::types::ScoredInsight;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Common English function words plus domain noise that says nothing
/// about a video's subject. Current-year digits live here as literals;
/// deriving them from a clock would make the output non-deterministic.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "that", "with", "this", "from", "your", "you", "are",
    "was", "were", "been", "being", "have", "has", "had", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "not", "but",
    "all", "any", "each", "few", "more", "most", "other", "some", "such", "nor",
    "only", "own", "same", "than", "then", "them", "they", "their", "there",
    "here", "what", "when", "where", "which", "who", "whom", "why", "how",
    "its", "his", "her", "him", "she", "our", "out", "off", "over", "under",
    "again", "further", "once", "into", "about", "between", "during", "before",
    "after", "above", "below", "too", "very", "just", "now", "also", "like",
    "get", "got", "one", "two", "new", "while",
    // Domain noise
    "video", "videos", "official", "channel", "youtube", "subscribe", "watch",
    "best", "top", "trending", "shorts",
    "2023", "2024", "2025",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Normalize free text into significant lowercase tokens.
///
/// Characters outside letters/digits/whitespace are stripped, the rest is
/// split on whitespace, and empty tokens, tokens shorter than 3 characters
/// and stop words are discarded. First-occurrence order is preserved and
/// duplicates are retained because frequency matters downstream.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() >= 3)
        .filter(|word| !is_stop_word(word))
        .map(|word| word.to_string())
        .collect()
}

/// Frequency-rank the vocabulary of a set of texts.
///
/// Returns at most 10 words, highest count first. Ties keep first-seen
/// insertion order: the sort is stable and compares counts only.
pub fn aggregate_keywords<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for text in texts {
        for token in tokenize(text) {
            match counts.entry(token) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    first_seen.push(entry.key().clone());
                    entry.insert(1);
                }
            }
        }
    }

    let mut ranked = first_seen;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.truncate(10);
    ranked
}

/// Extract the shared theme vocabulary from the top-ranked insights.
///
/// Up to 5 keywords, highest frequency first. Downstream generators must
/// treat every position as optional and fall back to their named defaults.
pub fn extract_themes(insights: &[ScoredInsight]) -> Vec<String> {
    let texts: Vec<String> = insights
        .iter()
        .map(|insight| format!("{} {}", insight.video.title, insight.video.description))
        .collect();

    let mut themes = aggregate_keywords(texts.iter().map(String::as_str));
    themes.truncate(5);
    themes
}
