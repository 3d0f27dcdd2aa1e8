use regex::Regex;
use std::sync::LazyLock;

/// ASCII letter runs, allowing inner apostrophes and hyphens ("don't", "well-known")
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:['-][A-Za-z]+)*").expect("valid word regex"));

/// A run of sentence terminators followed by whitespace or the end of the text
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("valid sentence regex"));

/// Splits text into words
pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Counts words in text
pub fn word_count(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Counts sentence terminators.
///
/// Text without any `.`, `!` or `?` has zero sentences.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_END.find_iter(text).count()
}

/// Splits text into sentences on terminators; a trailing unterminated
/// fragment is kept as the last sentence
pub fn split_into_sentences(text: &str) -> Vec<String> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits plain text into paragraphs, one per non-empty line
pub fn split_into_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize_whitespace_in_segment)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Normalizes whitespace within a single line or paragraph
pub fn normalize_whitespace_in_segment(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Estimates the syllables in a single word.
///
/// This is a vowel-group heuristic, not a dictionary lookup, and will
/// disagree with a real syllabifier on plenty of words:
/// - words of three letters or fewer have one syllable
/// - otherwise each run of `aeiouy` is a syllable
/// - a trailing `e` is silent (minus one)
/// - a trailing consonant + `le` adds one back ("ta-ble")
/// - each `io`, `ia` or `ea` is treated as a diphthong (minus one)
/// - the result is never below one
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if word.is_empty() {
        return 0;
    }
    if word.len() <= 3 {
        return 1;
    }

    let bytes = word.as_bytes();
    let mut count: i64 = 0;
    let mut in_vowel_group = false;
    for &b in bytes {
        if is_vowel(b) {
            if !in_vowel_group {
                count += 1;
            }
            in_vowel_group = true;
        } else {
            in_vowel_group = false;
        }
    }

    if word.ends_with('e') {
        count -= 1;
    }

    let n = bytes.len();
    if word.ends_with("le") && !is_vowel(bytes[n - 3]) {
        count += 1;
    }

    for diphthong in ["io", "ia", "ea"] {
        count -= word.matches(diphthong).count() as i64;
    }

    count.max(1) as usize
}

/// Sum of estimated syllables over every word in the text
pub fn total_syllables(text: &str) -> usize {
    WORD.find_iter(text).map(|m| count_syllables(m.as_str())).sum()
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}
