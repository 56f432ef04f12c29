//! Tag derivation from note text.
//!
//! Order of the resulting list:
//! 1. frequent words (most frequent first, ties by first appearance)
//! 2. default tags from the config
//! 3. a length tag (`quick-note` / `detailed`), when applicable
//! 4. the current month (`jan`..`dec`)
//!
//! When the list exceeds `max_tags`, frequent words are dropped from the tail.

use super::NormalizerConfig;
use crate::tags::{dedupe_tags, to_kebab_case};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub const QUICK_TAG: &str = "quick-note";
pub const DETAILED_TAG: &str = "detailed";

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "with", "this", "that", "from", "have", "has", "had", "was", "were",
        "are", "is", "be", "been", "being", "a", "an", "in", "on", "at", "to", "of", "by", "as",
        "or", "but", "not", "so", "if", "then", "else", "when", "where", "why", "how", "all",
        "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "too",
        "very", "can", "will", "just", "should", "now", "also", "well", "get", "got", "going",
        "into", "about", "there", "their", "them", "they", "what", "which", "would", "could",
        "your", "need",
    ]
    .into_iter()
    .collect()
});

pub fn month_tag(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

pub fn length_tag(text: &str, config: &NormalizerConfig) -> Option<&'static str> {
    let len = text.chars().count();
    if len < config.quick_threshold {
        Some(QUICK_TAG)
    } else if len > config.detailed_threshold {
        Some(DETAILED_TAG)
    } else {
        None
    }
}

/// Significant words of `text`, most frequent first.
pub fn frequent_words(text: &str, config: &NormalizerConfig) -> Vec<String> {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    // word -> (count, first position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, word) in lowered.split_whitespace().enumerate() {
        if word.len() < config.min_word_len
            || word.len() > config.max_word_len
            || STOP_WORDS.contains(word)
            || word.chars().all(|c| c.is_ascii_digit())
        {
            continue;
        }
        counts.entry(word).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(config.top_words)
        .map(|(word, _, _)| word.to_string())
        .collect()
}

/// Derives the tag list for trimmed note text.
pub fn derive_tags(text: &str, today: NaiveDate, config: &NormalizerConfig) -> Vec<String> {
    let mut words = frequent_words(text, config);

    let mut fixed: Vec<String> = config
        .default_tags
        .iter()
        .map(|t| to_kebab_case(t))
        .filter(|t| !t.is_empty())
        .collect();
    if let Some(tag) = length_tag(text, config) {
        fixed.push(tag.to_string());
    }
    fixed.push(month_tag(today).to_string());
    let fixed = dedupe_tags(fixed);

    words.retain(|w| !fixed.contains(w));
    let room = config.max_tags.saturating_sub(fixed.len());
    words.truncate(room);

    let mut tags = words;
    tags.extend(fixed);
    tags.truncate(config.max_tags);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, 1).unwrap()
    }

    #[test]
    fn test_month_tag() {
        assert_eq!(month_tag(date(1)), "jan");
        assert_eq!(month_tag(date(10)), "oct");
        assert_eq!(month_tag(date(12)), "dec");
    }

    #[test]
    fn test_length_tag_thresholds() {
        let config = NormalizerConfig::default();
        assert_eq!(length_tag(&"a".repeat(99), &config), Some(QUICK_TAG));
        assert_eq!(length_tag(&"a".repeat(100), &config), None);
        assert_eq!(length_tag(&"a".repeat(300), &config), None);
        assert_eq!(length_tag(&"a".repeat(301), &config), Some(DETAILED_TAG));
    }

    #[test]
    fn test_frequent_words_ranked_by_count_then_position() {
        let config = NormalizerConfig::default();
        let words = frequent_words(
            "Budget review. The budget needs a review of travel budget lines.",
            &config,
        );
        assert_eq!(words, vec!["budget", "review", "needs", "travel", "lines"]);
    }

    #[test]
    fn test_frequent_words_filters_noise() {
        let config = NormalizerConfig::default();
        let words = frequent_words("2024 2024 the this that cat dog ok whatever", &config);
        assert_eq!(words, vec!["whatever"]);
    }

    #[test]
    fn test_frequent_words_splits_on_punctuation() {
        let config = NormalizerConfig::default();
        let words = frequent_words("rust-lang/rust's compiler!!", &config);
        assert_eq!(words, vec!["rust", "lang", "compiler"]);
    }

    #[test]
    fn test_derive_tags_order() {
        let config = NormalizerConfig::default();
        let tags = derive_tags("Garden planning: tomatoes, tomatoes, basil", date(5), &config);
        assert_eq!(
            tags,
            vec!["tomatoes", "garden", "planning", "basil", "note", "idea", "quick-note", "may"]
        );
    }

    #[test]
    fn test_derive_tags_makes_room_for_fixed_tags() {
        let config = NormalizerConfig::default();
        let text = "alpha bravo charlie delta echoes foxtrot golfing hotel";
        let tags = derive_tags(text, date(3), &config);
        assert_eq!(tags.len(), 8);
        assert_eq!(&tags[4..], &["note", "idea", "quick-note", "mar"]);
    }

    #[test]
    fn test_derive_tags_no_duplicates_with_defaults() {
        let config = NormalizerConfig::default();
        let tags = derive_tags("note note idea idea sketch", date(2), &config);
        assert_eq!(tags, vec!["sketch", "note", "idea", "quick-note", "feb"]);
    }

    #[test]
    fn test_derive_tags_minimum_without_words() {
        let config = NormalizerConfig::default();
        let text = "a".repeat(3);
        let tags = derive_tags(&text, date(7), &config);
        assert_eq!(tags, vec!["note", "idea", "quick-note", "jul"]);
    }

    #[test]
    fn test_mid_length_text_has_no_length_tag() {
        let config = NormalizerConfig::default();
        let text = "word ".repeat(30);
        let tags = derive_tags(text.trim(), date(8), &config);
        assert_eq!(tags, vec!["word", "note", "idea", "aug"]);
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let config = NormalizerConfig {
            min_word_len: 3,
            top_words: 1,
            ..Default::default()
        };
        let tags = derive_tags("cat cat dog", date(1), &config);
        assert_eq!(tags, vec!["cat", "note", "idea", "quick-note", "jan"]);
    }
}
