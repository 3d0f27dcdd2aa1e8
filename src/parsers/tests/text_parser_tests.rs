use crate::parsers::text;

#[cfg(test)]
mod word_tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(text::word_count(""), 0);
        assert_eq!(text::word_count("   \n\t  "), 0);
    }

    #[test]
    fn test_words_keep_inner_apostrophes_and_hyphens() {
        let words = text::words("Don't stop: well-known 42 things");
        assert_eq!(words, vec!["Don't", "stop", "well-known", "things"]);
    }

    #[test]
    fn test_numbers_are_not_words() {
        assert_eq!(text::word_count("2024 was 100% great"), 2);
    }
}

#[cfg(test)]
mod sentence_tests {
    use super::*;

    #[test]
    fn test_terminators_followed_by_whitespace_or_end() {
        assert_eq!(text::sentence_count("One. Two! Three?"), 3);
        assert_eq!(text::sentence_count("Version 2.0 is out."), 1);
    }

    #[test]
    fn test_no_punctuation_means_zero_sentences() {
        assert_eq!(text::sentence_count("no punctuation anywhere in here"), 0);
    }

    #[test]
    fn test_terminator_runs_count_once() {
        assert_eq!(text::sentence_count("Wait... what?!"), 2);
    }

    #[test]
    fn test_split_keeps_trailing_fragment() {
        let sentences = text::split_into_sentences("First one. Second one! trailing bit");
        assert_eq!(sentences, vec!["First one", "Second one", "trailing bit"]);
    }
}

#[cfg(test)]
mod paragraph_tests {
    use super::*;

    #[test]
    fn test_split_into_paragraphs() {
        let result = text::split_into_paragraphs("Line one\n\n  Line   two \n");
        assert_eq!(result, vec!["Line one", "Line two"]);

        assert!(text::split_into_paragraphs("").is_empty());
        assert!(text::split_into_paragraphs("\n \n\t\n").is_empty());
    }
}

#[cfg(test)]
mod syllable_tests {
    use super::*;

    #[test]
    fn test_short_words_are_one_syllable() {
        assert_eq!(text::count_syllables("the"), 1);
        assert_eq!(text::count_syllables("cat"), 1);
        assert_eq!(text::count_syllables("a"), 1);
    }

    #[test]
    fn test_vowel_groups() {
        assert_eq!(text::count_syllables("happy"), 2);
        assert_eq!(text::count_syllables("rhythm"), 1);
        assert_eq!(text::count_syllables("strengths"), 1);
    }

    #[test]
    fn test_silent_e_and_consonant_le() {
        assert_eq!(text::count_syllables("make"), 1);
        assert_eq!(text::count_syllables("table"), 2);
        assert_eq!(text::count_syllables("simple"), 2);
        // A vowel before "le" gets no bonus, only the silent e
        assert_eq!(text::count_syllables("whole"), 1);
    }

    #[test]
    fn test_diphthong_correction() {
        assert_eq!(text::count_syllables("reading"), 1);
        assert_eq!(text::count_syllables("beautiful"), 2);
        assert_eq!(text::count_syllables("nation"), 1);
    }

    #[test]
    fn test_floor_at_one() {
        // ea, e => 2, silent e => 1, ea => 0, floored
        assert_eq!(text::count_syllables("create"), 1);
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        assert_eq!(text::count_syllables("Table!"), 2);
        assert_eq!(text::count_syllables("HAPPY"), 2);
        assert_eq!(text::count_syllables(""), 0);
    }

    #[test]
    fn test_total_syllables() {
        // the(1) happy(2) table(2)
        assert_eq!(text::total_syllables("The happy table."), 5);
    }
}
